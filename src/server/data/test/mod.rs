use crate::server::{
    data::{join::JoinRepository, store::Store},
    error::store::StoreError,
    model::{document::DocumentKind, object_id::ObjectId},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
