//! Builders for the standard transformation matrices.
//!
//! Every builder is a pure function of its numeric and vector inputs and
//! returns a 4x4 [`Matrix`](crate::Matrix); nothing here touches graphics
//! state. The namespaces mirror the stages of the classic transform chain:
//! [`model`] for object placement, [`view`] for the camera, and [`project`]
//! for the projection onto the screen.

pub mod model;
pub mod project;
pub mod view;
