// Splits a secret into Shamir shares over the scalar field of a NIST
// prime curve and prints the public key of the secret.
//
// USAGE: shamir-share numShares threshold secret [curveName]

use clap::{App, AppSettings, Arg, ArgMatches};
use ecshare::config::{OutputFormat, ShareConfig};
use ecshare::math::{registry, Point};
use ecshare::protocol::keygen::{deal, Dealing};
use ecshare::Error;
use rand::rngs::OsRng;
use serde_json::{json, Value};
use std::process::exit;

fn app() -> App<'static, 'static> {
    App::new("shamir-share")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Computes Shamir shares of a secret and its public key")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("numShares")
                .help("number of shares to compute")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("threshold")
                .help("number of shares needed to recover the secret")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("secret")
                .help("the secret, a non-negative decimal integer")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("curveName")
                .help("curve to share over [default: secp256r1]")
                .index(4),
        )
        .arg(
            Arg::with_name("feldman")
                .long("feldman")
                .help("also print Feldman commitments to the polynomial"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("print the result as JSON"),
        )
        .arg(
            Arg::with_name("check")
                .long("check")
                .help("validate the curve parameters before dealing"),
        )
}

fn point_json(point: &Point) -> Value {
    match point.coordinates() {
        None => Value::Null,
        Some((x, y)) => json!({ "x": x.to_string(), "y": y.to_string() }),
    }
}

fn print_text(dealing: &Dealing) {
    println!("Shares:");
    for share in &dealing.shares {
        println!("{}", share);
    }
    println!("Secret Public Key:");
    println!("{}", dealing.public_key);
    if let Some(commitments) = &dealing.commitments {
        println!("Feldman Commitments:");
        for commitment in commitments {
            println!("{}", commitment);
        }
    }
}

fn print_json(dealing: &Dealing) {
    let shares: Vec<Value> = dealing
        .shares
        .iter()
        .map(|share| json!({ "index": share.index, "value": share.value.to_string() }))
        .collect();
    let mut document = json!({
        "curve": dealing.curve,
        "threshold": dealing.threshold,
        "shares": shares,
        "public_key": point_json(&dealing.public_key),
    });
    if let Some(commitments) = &dealing.commitments {
        document["commitments"] = commitments.iter().map(point_json).collect();
    }
    println!("{:#}", document);
}

fn run(matches: &ArgMatches) -> ecshare::Result<()> {
    let config = ShareConfig::from_matches(matches)?;
    if config.check_curve {
        config.curve()?.validate(&mut OsRng)?;
        log::info!("curve {} passed parameter checks", config.curve);
    }
    let dealing = deal(&config, &mut OsRng)?;
    match config.format {
        OutputFormat::Text => print_text(&dealing),
        OutputFormat::Json => print_json(&dealing),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = app().get_matches();
    match run(&matches) {
        Ok(()) => {}
        Err(Error::UnknownCurve(name)) => {
            println!("Unknown curve name: {}", name);
            println!("Known curves: ");
            for known in registry::known_names() {
                println!("  {}", known);
            }
            exit(1);
        }
        Err(err) => {
            eprintln!("error: {}", err);
            exit(1);
        }
    }
}
