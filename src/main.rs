use clap::{Parser, Subcommand};
use colored::Colorize;
use smolsort_bench::BenchArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark and try out the sorting algorithms
    Bench(BenchArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.commands {
        Commands::Bench(bench_args) => bench_args.run(),
    };

    if let Err(e) = result {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_bench_commands() {
    for args in [
        &["smolsort", "bench", "list"][..],
        &["smolsort", "bench", "try", "-a", "comb-thirteen-m", "-d", "3", "-1", "2"],
        &["smolsort", "bench", "auto", "--sizes", "10,20", "-a", "bubble,shell-tokuda"],
        &["smolsort", "bench", "worst-case", "--size", "50", "--seed", "7"],
    ] {
        assert!(Cli::try_parse_from(args.iter().copied()).is_ok(), "{args:?}");
    }

    assert!(Cli::try_parse_from(["smolsort", "bench", "try"]).is_err());
    assert!(Cli::try_parse_from(["smolsort", "bench", "try", "-a", "bogo", "1"]).is_err());
}
