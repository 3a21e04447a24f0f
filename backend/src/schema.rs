// Mirrors the DDL in `seed::init`. Join tables carry no primary key in the
// database; Diesel needs one, so their column pairs stand in.

diesel::table! {
    listings (id) {
        id -> Int4,
        name -> Nullable<Text>,
        bedrooms -> Nullable<Int4>,
        bathrooms -> Nullable<Float8>,
        price -> Int4,
        sqft -> Nullable<Int4>,
        available_date -> Nullable<Date>,
        is_available -> Nullable<Bool>,
        building_type -> Text,
        deposit -> Nullable<Int4>,
        notes -> Nullable<Text>,
        parking_spaces -> Nullable<Int4>,
        address -> Text,
        is_bookmarked -> Nullable<Bool>,
        city -> Text,
    }
}

diesel::table! {
    traits (id) {
        id -> Int4,
        name -> Text,
    }
}

diesel::table! {
    listings_traits (listing_id, trait_id) {
        listing_id -> Int4,
        trait_id -> Int4,
    }
}

diesel::table! {
    groups (id) {
        id -> Int4,
        name -> Text,
    }
}

diesel::table! {
    groups_users (group_id, user_id) {
        group_id -> Int4,
        user_id -> Int4,
    }
}

diesel::table! {
    groups_listings (group_id, listing_id) {
        group_id -> Int4,
        listing_id -> Int4,
    }
}

diesel::joinable!(listings_traits -> listings (listing_id));
diesel::joinable!(listings_traits -> traits (trait_id));
diesel::joinable!(groups_users -> groups (group_id));
diesel::joinable!(groups_listings -> groups (group_id));
diesel::joinable!(groups_listings -> listings (listing_id));

diesel::allow_tables_to_appear_in_same_query!(
    listings,
    traits,
    listings_traits,
    groups,
    groups_users,
    groups_listings,
);
