use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("structura")
        .version("1.0.0")
        .author("Structura Contributors")
        .about("Derive structured-data payloads from stored documents")
        .arg(clap::arg!([INPUT] "Document JSON file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(-p --pretty "Pretty-print the JSON output"))
        .arg(clap::arg!(-e --extraction "Print the raw extraction instead of the payload"))
        .arg(
            clap::arg!(--collection <VALUES> "Build a collection payload from NAME DESC URL")
                .value_names(["NAME", "DESC", "URL"])
                .num_args(3),
        )
        .arg(clap::arg!(--wpm <NUM> "Reading speed in words per minute").default_value("200"))
        .arg(
            clap::arg!(--"min-entries" <NUM> "Minimum entries for a FAQ/how-to payload shape")
                .default_value("2"),
        )
        .arg(
            clap::arg!(--"max-entry-chars" <NUM> "Character cap for step and answer text")
                .default_value("500"),
        )
        .arg(clap::arg!(-v --verbose "Enable progress logging"))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "fish", "powershell"]),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "structura", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "structura", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "structura", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "structura", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
