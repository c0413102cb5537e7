//! Backend for the browser weather dashboard.
//!
//! The page is a thin rendering layer: it sends a city name to `/weather`,
//! receives one display-ready report (current summary, seven day slots, a
//! twelve-entry hourly strip) and writes the fields into its slots. The
//! theme toggle round-trips through `/theme`.

pub mod conditions;
pub mod config;
pub mod forecast;
pub mod preferences;
pub mod routes;
pub mod utils;
