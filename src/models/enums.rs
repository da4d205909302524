//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row lifecycle status. Deleted rows stay in place so rental history keeps
/// its referential integrity; every query filters on this explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum RecordStatus {
    Active = 0,
    Deleted = 1,
}

impl RecordStatus {
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl From<i16> for RecordStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => RecordStatus::Deleted,
            _ => RecordStatus::Active,
        }
    }
}

impl From<RecordStatus> for i16 {
    fn from(s: RecordStatus) -> Self {
        s as i16
    }
}
