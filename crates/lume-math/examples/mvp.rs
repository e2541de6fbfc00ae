//! Builds a model/view/projection chain and pushes a few vertices through
//! it, logging the intermediate matrices.
//!
//! Run with `RUST_LOG=debug` to see the individual transforms.

use lume_math::{
    transform::{model, project, view},
    vec3, vec4,
};

fn main() -> Result<(), lume_math::Error> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    let placement = model::rotate(&vec3(0.0, 1.0, 0.0), 45f32.to_radians())?
        .mul(&model::scale(2.0, None))?;
    let camera = view::look_at(
        &vec3(0.0, 2.0, 5.0),
        &vec3(0.0, 0.0, 0.0),
        &vec3(0.0, 1.0, 0.0),
    )?;
    let projection = project::perspective(60.0, 16.0 / 9.0, Some((0.1, 100.0)));

    log::debug!("model      = {placement}");
    log::debug!("view       = {camera}");
    log::debug!("projection = {projection}");

    let mvp = projection.mul(&camera)?.mul(&placement)?;
    for corner in [
        vec4(-0.5, -0.5, 0.0, 1.0),
        vec4(0.5, -0.5, 0.0, 1.0),
        vec4(0.0, 0.5, 0.0, 1.0),
    ] {
        let clip = mvp.mul_vector(&corner)?;
        println!("{corner} -> {clip}");
    }

    Ok(())
}
