use clap::{Arg, ArgAction, ArgMatches, Command};

fn scene_arg() -> Arg {
    Arg::new("scene")
        .long("scene")
        .short('s')
        .help("Path to a scene JSON file describing the host hierarchy")
        .required(true)
}

fn element_arg() -> Arg {
    Arg::new("element")
        .long("element")
        .short('e')
        .help("Element id within the scene (unknown ids resolve to the default summary)")
        .required(true)
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("tabstack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Navigation stack inspector for tab and tab group handles")
        .long_about(
            "tabstack resolves the navigation stack behind a tab or tab group handle of a \
             scripted host hierarchy and reports stack depth, root visibility, and the \
             topmost screen title. Scenes are JSON files standing in for live host state.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List the elements of a scene")
                .arg(scene_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("info")
                .about("Full stack summary for a tab handle")
                .arg(scene_arg())
                .arg(element_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("count")
                .about("Number of screens stacked on the tab's navigation controller")
                .arg(scene_arg())
                .arg(element_arg()),
        )
        .subcommand(
            Command::new("root")
                .about("Whether the tab currently shows its root screen")
                .arg(scene_arg())
                .arg(element_arg()),
        )
        .subcommand(
            Command::new("title")
                .about("Title of the tab's topmost screen")
                .arg(scene_arg())
                .arg(element_arg()),
        )
        .subcommand(
            Command::new("selected")
                .about("Full stack summary for the selected tab of a tab group handle")
                .arg(scene_arg())
                .arg(element_arg())
                .arg(json_arg()),
        )
}

#[allow(dead_code)]
pub fn get_matches() -> ArgMatches {
    build_cli().get_matches()
}
