pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod list;
pub mod model;
pub mod scene;
pub mod storage;
pub mod store;
pub mod geometry {
    pub mod coords;
    pub mod limits;
    pub mod polygon;
}
mod data;
mod svg;

pub use app::{App, ViewState};
pub use catalog::Catalog;
pub use config::MapConfig;
pub use error::{AppError, CatalogError, StorageError, StoreError};
pub use list::{ListRow, Stats};
pub use model::{Municipality, Point, Subdivision};
pub use scene::{Legend, LegendEntry, MapScene, ShapeNode, ShapeStyle};
pub use storage::{MemoryStorage, Storage};
pub use store::VisitedStore;
pub use svg::scene_to_svg;
