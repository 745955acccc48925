use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &[
    "blocks-simple",
    "blocks-json",
    "inline-json",
    "html-json",
    "html-treeviz",
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

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("quire")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A small static site generator for markdown content")
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
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "quire", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "quire", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "quire", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
