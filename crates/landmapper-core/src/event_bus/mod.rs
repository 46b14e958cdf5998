//! # Event Bus Module
//!
//! Publish/subscribe channel between the area tool and whatever displays its
//! results.
//!
//! ## Overview
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Dispatch is synchronous, on the publishing thread
//!
//! There is no global instance: the bus is created by the host and handed to
//! the map context, so tests can observe a private bus.
//!
//! ## Usage
//!
//! ```rust
//! use landmapper_core::event_bus::{AppEvent, AreaEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Area]),
//!     |event| {
//!         if let AppEvent::Area(AreaEvent::Updated { square_meters }) = event {
//!             println!("Area: {square_meters} m²");
//!         }
//!     },
//! );
//!
//! bus.publish(AppEvent::Area(AreaEvent::Updated { square_meters: 5000.0 }));
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
