use finite_automata::prelude::*;

use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

fn cli() -> Command {
    Command::new("fa-demo")
        .about("Determinizes and minimizes a small NFA and runs some words through all three")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Raises the log level, once for debug and twice for trace output"),
        )
}

fn level(matches: &ArgMatches) -> LevelFilter {
    match matches.get_count("verbose") {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn verdict(accepted: bool) -> String {
    if accepted {
        "accepted".green().to_string()
    } else {
        "rejected".red().to_string()
    }
}

fn main() -> Result<(), AutomatonError> {
    let matches = cli().get_matches();
    tracing_subscriber::fmt()
        .with_max_level(level(&matches))
        .with_writer(std::io::stderr)
        .init();

    let alphabet = Alphabet::from_symbols(['A', 'B']);
    let nfa = NFA::builder()
        .alphabet_size(alphabet.size())
        .with_state_colors([false, true])
        .with_transitions([(0, 0, 0), (0, 1, 1), (1, 0, 0), (1, 1, 0), (1, 1, 1)])
        .into_nfa(0)?;
    info!("built NFA with {} states", nfa.size());

    let dfa = nfa_to_dfa(&nfa);
    info!("subset construction produced {} states", dfa.size());
    let minimized = dfa.minimize();
    info!("minimal DFA has {} states", minimized.size());

    for text in ["ABBA", "BABA", "BABB"] {
        let word = alphabet.translate(text.chars())?;
        println!(
            "{text}: nfa {}, dfa {}, minimal dfa {}",
            verdict(nfa.accepts(word.iter().copied())?),
            verdict(dfa.accepts(word.iter().copied())?),
            verdict(minimized.accepts(word)?),
        );
    }

    println!("\nDeterminized automaton");
    if let Some(sets) = dfa.state_sets() {
        for (state, set) in sets.iter().enumerate() {
            println!("{state} = {}", set.show());
        }
    }
    print!("{dfa}");

    println!("\nMinimal automaton");
    println!("{}", minimized.transition_table());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_of(args: &[&str]) -> Result<LevelFilter, clap::Error> {
        cli()
            .try_get_matches_from(args.iter().copied())
            .map(|matches| level(&matches))
    }

    #[test]
    fn verbosity_is_counted() {
        assert_eq!(level_of(&["fa-demo"]).unwrap(), LevelFilter::INFO);
        assert_eq!(level_of(&["fa-demo", "-v"]).unwrap(), LevelFilter::DEBUG);
        assert_eq!(level_of(&["fa-demo", "-vv"]).unwrap(), LevelFilter::TRACE);
        assert_eq!(level_of(&["fa-demo", "-v", "-v"]).unwrap(), LevelFilter::TRACE);
        assert_eq!(level_of(&["fa-demo", "--verbose"]).unwrap(), LevelFilter::DEBUG);
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(cli().try_get_matches_from(["fa-demo", "--verbosity"]).is_err());
        assert!(cli().try_get_matches_from(["fa-demo", "extra"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        cli().debug_assert();
    }
}
