// Library root
// -----------
// The binary (`main.rs`) wires these modules into a terminal front-end
// for a portfolio backend.
//
// Module responsibilities:
// - `api`: HTTP client for `/api/works` and `/api/categories`, plus the
//   `PortfolioSource` trait the rest of the crate depends on.
// - `gallery` / `filters`: the card container and the filter button menu.
// - `page`: fetch-then-render controller tying both together.
// - `html`: markup export of a rendered page.
// - `ui`: interactive menu built on `dialoguer`.
// - `config` / `logger` / `error`: CLI flags, tracing setup, error type.
pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod gallery;
pub mod html;
pub mod logger;
pub mod page;
pub mod ui;

pub use api::{ApiClient, Category, PortfolioSource, Work};
pub use config::CliConfig;
pub use error::{GalleryError, Result};
pub use filters::{filter_works, Filter, FilterMenu};
pub use gallery::{Card, Gallery};
pub use page::Page;
