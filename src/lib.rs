// ABOUTME: Core library for the AktieTipset desktop application.
// ABOUTME: Wires plugins, shared UI state, the bridge, and the window lifecycle.

use log::info;
use tauri::{Manager, RunEvent};
use tauri_plugin_log::{Target, TargetKind};

pub mod bridge;
pub mod i18n;
pub mod shell;
pub mod theme;
pub mod window;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    #[allow(unused_mut)]
    let mut builder = tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .targets([
                    Target::new(TargetKind::Stdout),
                    Target::new(TargetKind::LogDir { file_name: None }),
                    Target::new(TargetKind::Webview),
                ])
                .max_file_size(5_000_000) // 5 MB per log file
                .rotation_strategy(tauri_plugin_log::RotationStrategy::KeepOne)
                .level(if cfg!(debug_assertions) {
                    log::LevelFilter::Debug
                } else {
                    log::LevelFilter::Info
                })
                .build(),
        )
        .plugin(tauri_plugin_opener::init());

    // A second launch focuses the window that is already open and tells the
    // user about it, instead of racing the first instance.
    #[cfg(desktop)]
    {
        builder = builder.plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            info!("[Window] Second launch detected, focusing the existing window");
            if let Some(window) = app.get_webview_window(window::MAIN_WINDOW_LABEL) {
                let _ = window.set_focus();
            }
            let state = app.state::<shell::ShellState>();
            let message = i18n::interpolate(
                &state.localizer().translate("app.alreadyRunning"),
                &[("product", shell::PRODUCT_NAME)],
            );
            shell::notify(
                app,
                shell::Notification {
                    level: shell::NotificationLevel::Info,
                    title: state.localizer().translate("app.title"),
                    message,
                },
            );
        }));
    }

    builder
        .manage(shell::ShellState::new())
        .manage(bridge::MessageHub::new())
        .invoke_handler(tauri::generate_handler![
            bridge::open_external,
            bridge::send_message,
            shell::shell_view,
            shell::toggle_color_scheme,
        ])
        .setup(|app| {
            // Build native menu bar for all platforms
            {
                use tauri::menu::{Menu, PredefinedMenuItem, Submenu};

                let separator = PredefinedMenuItem::separator(app)?;
                let quit = PredefinedMenuItem::quit(app, Some("Quit AktieTipset"))?;

                // macOS app menu includes Hide/Show items; Windows/Linux just Quit
                #[cfg(target_os = "macos")]
                let app_menu = {
                    let hide = PredefinedMenuItem::hide(app, Some("Hide AktieTipset"))?;
                    let hide_others = PredefinedMenuItem::hide_others(app, None)?;
                    let show_all = PredefinedMenuItem::show_all(app, None)?;
                    Submenu::with_items(
                        app,
                        "AktieTipset",
                        true,
                        &[&hide, &hide_others, &show_all, &separator, &quit],
                    )?
                };

                #[cfg(not(target_os = "macos"))]
                let app_menu = Submenu::with_items(app, "AktieTipset", true, &[&quit])?;

                let window_menu = {
                    let minimize = PredefinedMenuItem::minimize(app, None)?;
                    let zoom = PredefinedMenuItem::maximize(app, Some("Zoom"))?;
                    let fullscreen = PredefinedMenuItem::fullscreen(app, None)?;
                    let close = PredefinedMenuItem::close_window(app, None)?;
                    Submenu::with_items(
                        app,
                        "Window",
                        true,
                        &[&minimize, &zoom, &fullscreen, &separator, &close],
                    )?
                };

                let menu = Menu::with_items(app, &[&app_menu, &window_menu])?;
                app.set_menu(menu)?;
            }

            window::create_main_window(app.handle())?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app, event| match event {
            // Dock reactivation: recreate the window only if none are open.
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => window::handle_reopen(_app),
            // Last window closed: macOS keeps the app resident.
            RunEvent::ExitRequested { api, code: None, .. }
                if !window::exits_on_last_window_close(std::env::consts::OS) =>
            {
                api.prevent_exit();
            }
            _ => {}
        });
}
