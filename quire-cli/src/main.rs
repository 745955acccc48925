// Command-line interface for quire
//
// This binary builds static sites out of markdown content, and exposes the
// single-document conversions the build is made of.
//
// Usage:
//  quire [build] [--static DIR] [--public DIR] [--content DIR] [--template FILE]
//                                          - Build the site (default)
//  quire render <input> [-o <file>]        - Markdown file to an HTML fragment
//  quire title <input>                     - Print the document title
//  quire page <input> [--template FILE] [-o <file>]
//                                          - Markdown file to a full HTML page
//  quire inspect <input> [<transform>]     - Execute a transform (defaults to "blocks-simple")
//  quire --list-transforms                 - List available transforms
//
// Configuration comes from the built-in defaults, then ./quire.toml (or the
// file given with --config), then command line flags.

use quire_cli::transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use quire_config::{Loader, QuireConfig, SITE_CONFIG_FILE};
use quire_markdown::publish::{
    build_site, load_template, publish, PublishArtifact, PublishSpec, SiteSpec,
};
use quire_markdown::{extract_document_title, PageTemplate};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Flags of the build command and the config keys they override.
const BUILD_OVERRIDES: &[(&str, &str)] = &[
    ("static", "site.static_dir"),
    ("public", "site.public_dir"),
    ("content", "site.content_dir"),
    ("template", "site.template"),
];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Markdown file")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn dir_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("DIR")
        .help(help)
        .value_hint(ValueHint::DirPath)
}

fn template_arg() -> Arg {
    Arg::new("template")
        .long("template")
        .value_name("FILE")
        .help("Page template with {{ Title }} and {{ Content }}")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("quire")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A small static site generator for markdown content")
        .long_about(
            "quire turns a directory of markdown files into a static HTML site.\n\n\
            Running quire without a command builds the site: the static directory\n\
            is copied into the public directory, then every markdown file under the\n\
            content directory is rendered through the page template.\n\n\
            Examples:\n  \
            quire                                   # Build using quire.toml / defaults\n  \
            quire build --public docs               # Build into ./docs\n  \
            quire render post.md                    # Print the HTML fragment\n  \
            quire page post.md -o post.html         # Write a full page\n  \
            quire inspect post.md html-treeviz      # Show the HTML node tree",
        )
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a quire.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("build")
                .about("Build the site (default command)")
                .arg(dir_arg("static", "Directory copied verbatim into the public directory"))
                .arg(dir_arg("public", "Output directory"))
                .arg(dir_arg("content", "Directory of markdown pages"))
                .arg(template_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Render a markdown file to an HTML fragment")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("title")
                .about("Print the title of a markdown file")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("page")
                .about("Render a markdown file through a page template")
                .long_about(
                    "Render a markdown file as a full HTML page.\n\n\
                    The template defaults to site.template from the configuration,\n\
                    and to a built-in page when that file does not exist.",
                )
                .arg(input_arg())
                .arg(template_arg().short('t'))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect intermediate representations of a markdown file")
                .long_about(
                    "View the blocks, inline nodes or HTML tree of a markdown file.\n\n\
                    Transforms (stage-format):\n  \
                    - blocks-simple:  one line per block (default)\n  \
                    - blocks-json:    blocks and their types as JSON\n  \
                    - inline-json:    text nodes as JSON\n  \
                    - html-json:      HTML node tree as JSON\n  \
                    - html-treeviz:   HTML node tree visualization",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'blocks-simple'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let build_matches = match matches.subcommand() {
        Some(("build", sub_matches)) => Some(sub_matches),
        _ => None,
    };
    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        build_matches,
    );
    init_tracing(&config.log.level, matches.get_flag("verbose"));

    match matches.subcommand() {
        None | Some(("build", _)) => handle_build_command(&config),
        Some(("render", sub_matches)) => {
            let input = required(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(input, output);
        }
        Some(("title", sub_matches)) => {
            handle_title_command(required(sub_matches, "input"));
        }
        Some(("page", sub_matches)) => {
            let input = required(sub_matches, "input");
            let template = sub_matches.get_one::<String>("template").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_page_command(input, template, output, &config);
        }
        Some(("inspect", sub_matches)) => {
            let input = required(sub_matches, "input");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(input, transform);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value,
        None => fail(format!("missing argument '{name}'")),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn read_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| fail(format!("cannot read '{path}': {e}")))
}

/// Handle the build command
fn handle_build_command(config: &QuireConfig) {
    let site = SiteSpec::from(config);
    let report = build_site(&site).unwrap_or_else(|e| fail(e));
    println!(
        "Built {} page(s) and copied {} static file(s) into {}",
        report.pages.len(),
        report.assets_copied,
        site.public_dir.display()
    );
}

/// Handle the render command
fn handle_render_command(input: &str, output: Option<&str>) {
    let source = read_source(input);
    let mut spec = PublishSpec::new(&source);
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }
    emit(publish(spec).unwrap_or_else(|e| fail(e)));
}

/// Handle the title command
fn handle_title_command(input: &str) {
    let source = read_source(input);
    let title = extract_document_title(&source).unwrap_or_else(|e| fail(e));
    println!("{title}");
}

/// Handle the page command
fn handle_page_command(
    input: &str,
    template_path: Option<&str>,
    output: Option<&str>,
    config: &QuireConfig,
) {
    let source = read_source(input);
    let template = resolve_template(template_path, config);

    let mut spec = PublishSpec::new(&source).with_template(&template);
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }
    emit(publish(spec).unwrap_or_else(|e| fail(e)));
}

fn resolve_template(explicit: Option<&str>, config: &QuireConfig) -> PageTemplate {
    if let Some(path) = explicit {
        return load_template(Path::new(path)).unwrap_or_else(|e| fail(e));
    }
    let configured = &config.site.template;
    if configured.is_file() {
        load_template(configured).unwrap_or_else(|e| fail(e))
    } else {
        tracing::debug!(
            template = %configured.display(),
            "configured template not found, using the built-in page"
        );
        PageTemplate::default()
    }
}

fn emit(artifact: PublishArtifact) {
    match artifact {
        PublishArtifact::InMemory(html) => println!("{html}"),
        PublishArtifact::File(path) => tracing::info!(path = %path.display(), "wrote output"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, transform: &str) {
    let source = read_source(input);
    let output = transforms::execute_transform(&source, transform).unwrap_or_else(|e| fail(e));
    print!("{output}");
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  blocks      - Blank-line separated blocks and their types");
    println!("  inline      - Text nodes produced by the inline tokenizer");
    println!("  html        - HTML node tree of the whole document\n");

    println!("Formats:");
    println!("  simple      - One line per block");
    println!("  json        - JSON output");
    println!("  treeviz     - Tree visualization\n");

    println!("Available transform combinations:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>, build: Option<&ArgMatches>) -> QuireConfig {
    let loader = Loader::new();
    let mut loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader.with_optional_file(SITE_CONFIG_FILE)
    };

    if let Some(build) = build {
        for (flag, key) in BUILD_OVERRIDES {
            loader = loader
                .set_override_option(key, build.get_one::<String>(flag).cloned())
                .unwrap_or_else(|err| fail(format!("invalid --{flag}: {err}")));
        }
    }

    loader
        .build()
        .unwrap_or_else(|err| fail(format!("failed to load configuration: {err}")))
}

fn init_tracing(default_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
