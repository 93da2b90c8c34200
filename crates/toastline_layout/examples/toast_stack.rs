//! Toast Stack Demo
//!
//! Drives a toaster on a headless surface through one toast lifecycle:
//! - two toasts mount transparent and get measured after the first paint
//! - the stack re-syncs so the older toast moves below the newer one
//! - the newer toast is dismissed, plays its exit and is removed
//!
//! Pass a TOML file to override the toaster settings.
//!
//! Run with: cargo run -p toastline_layout --example toast_stack [config.toml]

use anyhow::Result;
use toastline_layout::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ToasterConfig::load(path)?,
        None => ToasterConfig::default().position(ToastPosition::BottomRight),
    };
    tracing::info!(position = %config.position, gutter = config.gutter, "starting toast stack demo");

    let mut surface = HeadlessSurface::new();
    let mut frames = FrameQueue::new();
    let mut toaster = Toaster::new(config);

    let saving = Toast::new(ToastId(1), "Saving draft...").toast_type(ToastType::Loading);
    let uploaded = Toast::computed(ToastId(2), |t: &Toast| {
        Renderable::Text(format!("Upload finished ({})", t.id))
    })
    .toast_type(ToastType::Success)
    .animation(MotionPreset::SlideLeft);

    // Newest first
    let mut toasts = vec![uploaded, saving];

    toaster.sync(&toasts, &mut surface, &mut frames);
    frames.commit_frame(&mut surface);
    if toaster.take_restack() {
        toaster.sync(&toasts, &mut surface, &mut frames);
    }

    for toast in &toasts {
        tracing::info!(
            id = %toast.id,
            height = toaster.height_of(toast.id).unwrap_or_default(),
            offset = toaster.offset_for(toast.id, &toasts),
            "stacked"
        );
    }

    // Dismiss the upload toast; it stays mounted while it animates out
    toasts[0].visible = false;
    toaster.sync(&toasts, &mut surface, &mut frames);
    if let Some(mounted) = toaster.mounted(ToastId(2)) {
        let element = surface.get(mounted.node());
        println!("{}", serde_json::to_string_pretty(&element)?);
    }

    toasts.remove(0);
    toaster.sync(&toasts, &mut surface, &mut frames);

    println!("<style>\n{}\n</style>", toaster.stylesheet());
    println!("{}", surface.to_html());
    Ok(())
}
