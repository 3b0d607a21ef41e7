use std::path::Path;

use clap::ArgMatches;
use tracing::{error, info, warn};

use tabstack_core::query::{
    info_for_selected_tab, info_for_tab, is_root_visible, stack_count, top_title,
};
use tabstack_core::{Scene, StackSummary, UiElement, events, load_scene};

use crate::table;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        Some(("info", sub_matches)) => handle_info_command(sub_matches),
        Some(("count", sub_matches)) => handle_count_command(sub_matches),
        Some(("root", sub_matches)) => handle_root_command(sub_matches),
        Some(("title", sub_matches)) => handle_title_command(sub_matches),
        Some(("selected", sub_matches)) => handle_selected_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load the scene named by --scene, reporting failures to the user.
fn load_scene_arg(matches: &ArgMatches) -> Result<Scene, Box<dyn std::error::Error>> {
    let path = matches.get_one::<String>("scene").unwrap();

    match load_scene(Path::new(path)) {
        Ok(scene) => Ok(scene),
        Err(e) => {
            eprintln!("Failed to load scene: {}", e);
            error!(event = "cli.scene_load_failed", path = path.as_str(), error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Fetch the --element handle from the scene. An unknown id is not an
/// error: the queries are total, so the missing handle flows through as
/// `None` and produces the default summary.
fn element_arg<'a>(scene: &'a Scene, matches: &ArgMatches) -> Option<&'a dyn UiElement> {
    let id = matches.get_one::<String>("element").unwrap();
    let element = scene.element(id);
    if element.is_none() {
        warn!(event = "cli.element_unknown", id = id.as_str());
        eprintln!("Warning: no element '{}' in scene; treating as missing handle", id);
    }
    element.map(|e| e as &dyn UiElement)
}

fn print_summary(
    summary: &StackSummary,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("Stack summary:");
        println!("  Count: {}", summary.count());
        println!("  Root visible: {}", summary.is_root_visible());
        println!("  Top title: {}", summary.top_title().unwrap_or("(none)"));
        println!("  Path: {}", summary.debug_path());
    }
    Ok(())
}

fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let scene = load_scene_arg(matches)?;

    if json_output {
        let rows: Vec<serde_json::Value> = scene
            .elements()
            .iter()
            .map(|(id, element)| {
                serde_json::json!({ "id": id, "kind": UiElement::kind(element) })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if scene.elements().is_empty() {
        println!("Scene contains no elements.");
    } else {
        println!("Scene elements:");
        table::print_elements_table(scene.elements());
    }

    info!(event = "cli.list_completed", count = scene.elements().len());
    Ok(())
}

fn handle_info_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.info_started", json_output = json_output);

    let scene = load_scene_arg(matches)?;
    let summary = info_for_tab(element_arg(&scene, matches));
    print_summary(&summary, json_output)?;

    info!(event = "cli.info_completed", count = summary.count());
    Ok(())
}

fn handle_count_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.count_started");

    let scene = load_scene_arg(matches)?;
    let count = stack_count(element_arg(&scene, matches));
    println!("{}", count);

    info!(event = "cli.count_completed", count = count);
    Ok(())
}

fn handle_root_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.root_started");

    let scene = load_scene_arg(matches)?;
    let visible = is_root_visible(element_arg(&scene, matches));
    println!("{}", visible);

    info!(event = "cli.root_completed", is_root_visible = visible);
    Ok(())
}

fn handle_title_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.title_started");

    let scene = load_scene_arg(matches)?;
    let title = top_title(element_arg(&scene, matches));
    println!("{}", title.as_deref().unwrap_or("(none)"));

    info!(event = "cli.title_completed", title = ?title);
    Ok(())
}

fn handle_selected_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.selected_started", json_output = json_output);

    let scene = load_scene_arg(matches)?;
    let summary = info_for_selected_tab(element_arg(&scene, matches));
    print_summary(&summary, json_output)?;

    info!(event = "cli.selected_completed", count = summary.count());
    Ok(())
}
