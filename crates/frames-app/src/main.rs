use std::rc::Rc;

use anyhow::Context;
use frames_core::{Role, Scheduler};
use frames_navigation::{NavStack, Route};
use frames_theme::{ThemeMode, ThemeProvider, ThemeStore};
use frames_ui::render_frame;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // FRAMES_THEME=light|dark selects the starting mode; anything else is a
    // configuration error and aborts before composing.
    let mode = match std::env::var("FRAMES_THEME") {
        Ok(raw) => raw.parse::<ThemeMode>().context("reading FRAMES_THEME")?,
        Err(_) => ThemeMode::Dark,
    };
    log::info!("starting frames with {mode} theme");

    let store = ThemeStore::new(mode == ThemeMode::Dark);
    let nav = Rc::new(NavStack::new(Route::Landing));
    let mut sched = Scheduler::new();

    let build = {
        let store = store.clone();
        let nav = nav.clone();
        move |_: &mut Scheduler| frames_app::app(&store, nav.clone())
    };

    let frame = render_frame(&mut sched, store.current_mode(), build.clone());
    println!(
        "landing ({}): {} scene nodes, {} focusable controls",
        store.current_mode(),
        frame.scene.nodes.len(),
        frame.focus_chain.len()
    );

    // Drive the primary action the way a pointer would.
    if let Some(cta) = frame
        .semantics_nodes
        .iter()
        .find(|s| s.role == Role::Button && s.label.as_deref() == Some("Get Started →"))
    {
        frame.tap(cta.rect.center());
    }
    println!("route stack after tap: {}", nav.to_json());

    // Flip the theme and compose again.
    store.toggle();
    let frame = render_frame(&mut sched, store.current_mode(), build);
    println!(
        "landing ({}): clear color {:?}",
        store.current_mode(),
        frame.scene.clear_color
    );

    Ok(())
}
