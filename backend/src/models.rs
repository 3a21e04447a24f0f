use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Serialize;

use crate::schema::{groups, groups_listings, groups_users, listings, listings_traits, traits};

#[derive(Debug, Clone, PartialEq, Serialize, Queryable, Selectable)]
#[diesel(table_name = listings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Listing {
    pub id: i32,
    pub name: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<f64>,
    pub price: i32,
    pub sqft: Option<i32>,
    pub available_date: Option<NaiveDate>,
    pub is_available: Option<bool>,
    pub building_type: String,
    pub deposit: Option<i32>,
    pub notes: Option<String>,
    pub parking_spaces: Option<i32>,
    pub address: String,
    pub is_bookmarked: Option<bool>,
    pub city: String,
}

/// A listing as read from the sample file. `None` is stored as NULL.
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = listings)]
pub struct NewListing {
    pub name: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<f64>,
    pub price: i32,
    pub sqft: Option<i32>,
    pub available_date: Option<NaiveDate>,
    pub building_type: String,
    pub deposit: Option<i32>,
    pub is_available: Option<bool>,
    pub notes: Option<String>,
    pub parking_spaces: Option<i32>,
    pub address: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Queryable, Selectable)]
#[diesel(table_name = traits)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Trait {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Queryable, Selectable)]
#[diesel(table_name = groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Group {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Queryable, Insertable)]
#[diesel(table_name = listings_traits)]
pub struct ListingTrait {
    pub listing_id: i32,
    pub trait_id: i32,
}

#[derive(Debug, Clone, PartialEq, Queryable, Insertable)]
#[diesel(table_name = groups_users)]
pub struct GroupUser {
    pub group_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Queryable, Insertable)]
#[diesel(table_name = groups_listings)]
pub struct GroupListing {
    pub group_id: i32,
    pub listing_id: i32,
}
