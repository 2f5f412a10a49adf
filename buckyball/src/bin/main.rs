use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use serde::Serialize;
use slog::{crit, info, o, Level, Logger};

use buckyball::board::{Board, Tile};
use buckyball::config::BoardConfig;
use buckyball::dice::roll_dice;
use buckyball::element::ElementIndex;
use buckyball::game_state::GameStateBuilder;
use buckyball::logging::terminal_logger;
use buckyball::render::make_board_meshes;
use buckyball::topology::Topology;

fn cli() -> Command {
    Command::new("buckyball")
        .about("Generate a board on a truncated icosahedron")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("JSON board config; anything left out takes its default")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("N")
                .help("Overrides the seed from the config")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("dump-json")
                .long("dump-json")
                .help("Print the generated board to stdout as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rolls")
                .short('r')
                .long("rolls")
                .value_name("N")
                .help("Roll the dice N times and collect production")
                .value_parser(clap::value_parser!(u32))
                .default_value("0"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug output")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Serialize)]
struct BoardDump<'a> {
    seed: u64,
    topology: &'a Topology,
    tiles: &'a [Tile],
}

fn run(matches: &ArgMatches, log: &Logger) -> Result<(), Box<dyn Error>> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            info!(log, "Loading config"; "path" => %path.display());
            BoardConfig::load(path)?
        }
        None => BoardConfig::default(),
    };
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = seed;
    }

    let board = Board::from_config(&config, log)?;
    let topology: &Topology = board.topology();
    let index = ElementIndex::new(&board);
    let meshes = make_board_meshes(&board);
    info!(log, "Board ready";
        "seed" => board.seed(),
        "vertices" => topology.vertices().len(),
        "edges" => topology.edges().len(),
        "faces" => topology.faces().len(),
        "elements" => index.len(),
        "meshes" => meshes.len()
    );

    let rolls = matches.get_one::<u32>("rolls").cloned().unwrap_or(0);
    if rolls > 0 {
        let mut game = GameStateBuilder::new()
            .with_resources(config.starting_resources)
            .with_logger(log)
            .build();
        // Nothing produces without a building, so claim the first vertex if we can.
        if let Err(e) = game.build_settlement(topology, 0) {
            info!(log, "Couldn't place a starting settlement"; "reason" => %e);
        }
        let mut rng = Xoshiro256StarStar::seed_from_u64(board.seed());
        for _ in 0..rolls {
            let roll = roll_dice(&mut rng);
            let produced = game.collect(&board, roll);
            info!(log, "Rolled"; "total" => roll.total(), "produced" => produced.total());
        }
        info!(log, "Finished rolling"; "held" => game.ledger().total());
    }

    if matches.get_flag("dump-json") {
        let dump = BoardDump {
            seed: board.seed(),
            topology,
            tiles: board.tiles(),
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
    }
    Ok(())
}

fn main() {
    let matches = cli().get_matches();
    let level = if matches.get_flag("verbose") {
        Level::Debug
    } else {
        Level::Info
    };
    let root_log = terminal_logger(level);
    let log = root_log.new(o!("system" => "cli"));

    if let Err(e) = run(&matches, &log) {
        crit!(log, "Failed"; "error" => %e);
        // Let the async drain flush before exiting.
        drop(log);
        drop(root_log);
        process::exit(1);
    }
}
