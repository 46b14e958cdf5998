//! Coordinate search and fly-to requests.
//!
//! The search box holds raw latitude/longitude text. Submitting it either
//! yields a fresh [`ViewportTarget`] for the map surface or a typed
//! [`CoordinateError`]; a failed submit changes nothing and publishes
//! nothing.

use landmapper_core::{
    parse_coordinate, AppEvent, CoordinateAxis, CoordinateError, LatLng, ViewportEvent,
    ViewportTarget,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::map_context::MapContext;

/// How the map flies to a searched location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlyToOptions {
    pub zoom: u8,
    pub duration_secs: f64,
}

impl Default for FlyToOptions {
    fn default() -> Self {
        Self {
            zoom: 18,
            duration_secs: 2.0,
        }
    }
}

/// A named location offered as a one-click search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Preset {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }

    /// New Delhi, the stock test location
    pub fn delhi() -> Self {
        Self::new("Delhi", 28.6139, 77.2090)
    }

    pub fn location(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Latitude/longitude search box.
#[derive(Debug, Clone, Default)]
pub struct CoordinateSearch {
    latitude: String,
    longitude: String,
    options: FlyToOptions,
    last_request_id: u64,
    pending: Option<ViewportTarget>,
}

impl CoordinateSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FlyToOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> FlyToOptions {
        self.options
    }

    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    pub fn longitude(&self) -> &str {
        &self.longitude
    }

    pub fn set_latitude(&mut self, text: impl Into<String>) {
        self.latitude = text.into();
    }

    pub fn set_longitude(&mut self, text: impl Into<String>) {
        self.longitude = text.into();
    }

    /// Id of the most recent target, 0 before the first successful submit
    pub fn last_request_id(&self) -> u64 {
        self.last_request_id
    }

    /// Target not yet consumed by the map surface
    pub fn pending_target(&self) -> Option<&ViewportTarget> {
        self.pending.as_ref()
    }

    /// Hand the pending target to the map surface; each target is consumed once.
    pub fn take_target(&mut self) -> Option<ViewportTarget> {
        self.pending.take()
    }

    /// Validate the current inputs and issue a fly-to.
    ///
    /// Each success gets a request id one higher than the last, so repeating
    /// the same coordinates still moves the map. A newer target overwrites
    /// one that was never taken.
    pub fn submit(&mut self, ctx: &MapContext) -> Result<ViewportTarget, CoordinateError> {
        let center = match self.parse_inputs() {
            Ok(center) => center,
            Err(e) => {
                debug!(
                    latitude = %self.latitude,
                    longitude = %self.longitude,
                    error = %e,
                    "Coordinate search rejected"
                );
                return Err(e);
            }
        };

        self.last_request_id += 1;
        let target = ViewportTarget {
            center,
            request_id: self.last_request_id,
            zoom: self.options.zoom,
            duration_secs: self.options.duration_secs,
        };
        self.pending = Some(target);

        info!(%center, request_id = target.request_id, "Flying to coordinates");
        ctx.publish(AppEvent::Viewport(ViewportEvent::FlyTo(target)));
        Ok(target)
    }

    /// Fill both inputs and submit.
    pub fn search(
        &mut self,
        ctx: &MapContext,
        latitude: &str,
        longitude: &str,
    ) -> Result<ViewportTarget, CoordinateError> {
        self.set_latitude(latitude);
        self.set_longitude(longitude);
        self.submit(ctx)
    }

    /// Fill the inputs with a preset's coordinates and submit.
    pub fn fly_to_preset(
        &mut self,
        ctx: &MapContext,
        preset: &Preset,
    ) -> Result<ViewportTarget, CoordinateError> {
        self.search(ctx, &preset.lat.to_string(), &preset.lng.to_string())
    }

    fn parse_inputs(&self) -> Result<LatLng, CoordinateError> {
        let lat = parse_coordinate(&self.latitude, CoordinateAxis::Latitude)?;
        let lng = parse_coordinate(&self.longitude, CoordinateAxis::Longitude)?;
        Ok(LatLng::new(lat, lng))
    }
}
