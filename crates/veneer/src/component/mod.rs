//! Component specs, variant composition, and style resolution.
//!
//! A [`ComponentSpec`] ties a name (the identity a render host dispatches
//! on) to a rule chain. [`ComponentSpec::extend`] derives variants;
//! [`resolve`] turns a spec, instance props, and the ambient theme into the
//! flat [`Declarations`](crate::Declarations) mapping the render host
//! paints.

mod registry;
mod resolve;
mod spec;

pub use registry::Components;
pub use resolve::{resolve, Resolution, Unresolved};
pub use spec::ComponentSpec;
