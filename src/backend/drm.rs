//! EDID retrieval from DRM connectors
//!
//! The kernel publishes the EDID of every connected display as the `EDID` blob
//! property of its connector.
//!
//! ```no_run
//! # fn example(drm_device: &impl drm::control::Device, connector: drm::control::connector::Handle) {
//! use drm_sink_info::backend::drm::product_id_for_connector;
//! use drm_sink_info::edid::render_product_id;
//!
//! if let Some(id) = product_id_for_connector(drm_device, connector) {
//!     println!("{}", render_product_id(&id, false));
//! }
//! # }
//! ```

use drm::control::{connector, Device as ControlDevice};
use tracing::{debug, trace};

use crate::edid::{get_product_id, ProductId};

/// Fetch the raw EDID of a connector
///
/// Returns `None` if the connector has no `EDID` property or the blob is not
/// accessible. A disconnected connector usually yields `None` as well.
pub fn edid_for_connector(device: &impl ControlDevice, connector: connector::Handle) -> Option<Vec<u8>> {
    let props = device.get_properties(connector).ok()?;
    let (handles, values) = props.as_props_and_values();

    let (info, value) = handles
        .iter()
        .zip(values.iter())
        .filter_map(|(handle, value)| {
            let info = device.get_property(*handle).ok()?;

            Some((info, *value))
        })
        .find(|(info, _)| info.name().to_str() == Ok("EDID"))?;

    let blob = info.value_type().convert_value(value).as_blob()?;
    match device.get_property_blob(blob) {
        Ok(data) => {
            trace!(?connector, len = data.len(), "Read EDID blob");
            Some(data)
        }
        Err(err) => {
            debug!(?connector, ?err, "Failed to read EDID blob");
            None
        }
    }
}

/// Get the vendor & product identification of the display on a connector
///
/// An EDID blob that is too short yields the all zero [`ProductId`].
pub fn product_id_for_connector(
    device: &impl ControlDevice,
    connector: connector::Handle,
) -> Option<ProductId> {
    edid_for_connector(device, connector).map(|edid| get_product_id(Some(edid.as_slice())))
}
