use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};

mod create;
mod get_by_ticket_id;
