//! # LandMapper Designer
//!
//! Drawing and measuring a land boundary on a map.
//!
//! ## Core Components
//!
//! - **Shapes**: rectangles and polygons in latitude/longitude
//! - **Geodesic area**: spherical polygon area in square meters
//! - **Area tool**: the draw → edit → remove lifecycle of the single active
//!   shape, publishing its area after every change
//! - **Map context**: draw controls, path style and the event bus, passed
//!   explicitly to every handler
//! - **Coordinate search**: validated fly-to requests for the map surface
//!
//! ## Architecture
//!
//! ```text
//! Map surface ──MapEvent──> AreaTool ──AppEvent──> EventBus ──> panels
//!                              │
//!                              └── Shape ── geodesic_area()
//!
//! Lat/Lng inputs ──> CoordinateSearch ──ViewportTarget──> map surface
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use landmapper_core::{LatLng, ShapeKind};
//! use landmapper_designer::{AreaTool, MapContext};
//!
//! let ctx = MapContext::default();
//! let mut tool = AreaTool::new();
//!
//! tool.start_draw(&ctx, ShapeKind::Polygon)?;
//! tool.add_vertex(&ctx, LatLng::new(0.0, 0.0))?;
//! tool.add_vertex(&ctx, LatLng::new(0.0, 0.001))?;
//! tool.add_vertex(&ctx, LatLng::new(0.001, 0.001))?;
//! tool.finish(&ctx)?;
//!
//! assert!(tool.area_sq_m() > 0.0);
//! # Ok::<(), landmapper_designer::ToolError>(())
//! ```

pub mod error;
pub mod geodesic;
pub mod map_context;
pub mod map_events;
pub mod model;
pub mod tool_state;
pub mod viewport;

pub use error::{ToolError, ToolResult};
pub use geodesic::{geodesic_area, EARTH_RADIUS_M, MIN_RING_VERTICES};
pub use map_context::{ControlPosition, DrawControls, MapContext, PathStyle};
pub use map_events::MapEvent;
pub use model::{FieldPolygon, FieldRectangle, FieldShape, Shape};
pub use tool_state::{AreaTool, ToolPhase, ToolState};
pub use viewport::{CoordinateSearch, FlyToOptions, Preset};
