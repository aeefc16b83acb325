//! Rangeform Core: bounded float parameters with linked slider/editor surfaces.
//!
//! This crate contains:
//! - The value range and slider mapping law
//! - Locale-independent decimal parsing and formatting
//! - Owned UI surfaces (label, slider, decimal editor) and the host grid contract
//! - `FloatParameter`, which keeps value, slider, and editor consistent
//! - Configuration nodes and TOML parameter documents
//! - A form that builds, lays out, resets, and saves a document's parameters

pub mod error;
pub mod factory;
pub mod form;
pub mod layout;
pub mod node;
pub mod notify;
pub mod number;
pub mod parameter;
pub mod range;
pub mod surface;

pub use error::{DocumentError, ParameterError};
pub use factory::{build_parameter, ParseMode};
pub use form::ParameterForm;
pub use layout::{FormGrid, GridCell, GridLayout, Host, NoGrid, SurfaceRole};
pub use node::{ConfigNode, ParameterDocument, ParameterNode};
pub use notify::{Notifier, SubscriptionId, ValueChanged};
pub use parameter::{FloatParameter, Parameter};
pub use range::{ValueRange, SLIDER_MAX, SLIDER_MIN};
pub use surface::{DecimalEditor, Label, Slider, Surfaces};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: plain data types can cross threads.
    ///
    /// Parameters themselves hold non-`Send` callbacks and live on the UI
    /// thread; documents and events are what gets handed around.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<ValueRange>();
        require_sync::<ValueRange>();
        require_send::<ParameterDocument>();
        require_sync::<ParameterDocument>();
        require_send::<ValueChanged>();
        require_sync::<ValueChanged>();
        require_send::<Surfaces>();
        require_sync::<Surfaces>();
        require_send::<DocumentError>();
        require_sync::<DocumentError>();
    }

    /// Architecture contract: a host without a grid is a valid host.
    #[test]
    fn host_trait_object_builds() {
        fn _attach(p: &mut dyn Parameter, host: &mut dyn Host) -> bool {
            p.add_to(host, 0)
        }
        let mut p = FloatParameter::new("x", ValueRange::new(0.0, 1.0), 0.0, 0.0);
        assert!(!_attach(&mut p, &mut NoGrid));
        assert!(!p.is_attached());
    }
}
