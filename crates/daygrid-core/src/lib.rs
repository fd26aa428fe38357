//! # Daygrid Core Library
//!
//! This library provides the core business logic for Daygrid, the day-view
//! reminder timeline. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI shell
//! expected to be a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Timeline**: stateless column-packing layout for one day of
//!   reminders, recomputed in full on every call
//! - **Geometry**: pixel/percentage placement of positioned blocks inside
//!   a fixed-height-per-hour grid
//! - **Map links**: coordinate extraction from shared map URLs
//! - **Config**: TOML-based rendering preferences
//!
//! ## Key Components
//!
//! - [`DayLayoutEngine`]: day layout computation
//! - [`ReminderItem`] / [`PositionedItem`]: input and output item models
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod maplink;
pub mod time;
pub mod timeline;

pub use config::Config;
pub use error::{ConfigError, CoreError, MapLinkError, TimeParseError};
pub use maplink::{parse_maps_link, Coordinates};
pub use time::TimeOfDay;
pub use timeline::{
    items_starting_in_hour, layout_day, BlockGeometry, DayLayoutEngine, LayoutConfig,
    PositionedItem, ReminderItem,
};
