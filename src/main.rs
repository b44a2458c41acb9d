//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use std::env;
use std::io::Write;
use std::process;
use std::str::FromStr;
use tile_boundary_core::core::{read_config, ApplicationCfg, Config};
use tile_boundary_core::output::{layer_to_csv, layer_to_geojson};
use tile_boundary_core::overlay::{BoundaryOverlay, Viewport};
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (None, Ok(rust_log_env)) => rust_log_env,
        (loglevel, _) => loglevel.unwrap_or("info").to_string(),
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

fn exit_with_error(msg: &str) -> ! {
    eprintln!("{}", msg);
    process::exit(1)
}

fn parse_arg<T: FromStr>(args: &ArgMatches<'_>, name: &str, typename: &str) -> Option<T> {
    args.value_of(name).map(|s| {
        s.parse::<T>().unwrap_or_else(|_| {
            exit_with_error(&format!("Error parsing '{}' as {} value", name, typename))
        })
    })
}

fn config_from_args(args: &ArgMatches<'_>) -> ApplicationCfg {
    let mut config = if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath).unwrap_or_else(|err| {
            exit_with_error(&format!("Error reading configuration - {} ", err))
        })
    } else {
        ApplicationCfg::default()
    };
    if let Some(tile_type) = args.value_of("tile-type") {
        config.grid.tile_type = Some(tile_type.to_string());
        config.grid.tile_size = None;
    }
    if let Some(zoom) = parse_arg::<u8>(args, "zoom", "integer") {
        config.overlay.zoom = Some(zoom);
    }
    if let Some(maxzoom) = parse_arg::<u8>(args, "maxzoom", "integer") {
        config.overlay.maxzoom = maxzoom;
    }
    config
}

fn grid(args: &ArgMatches<'_>) {
    let config = config_from_args(args);
    let mut overlay = BoundaryOverlay::from_config(&config).unwrap_or_else(|err| {
        exit_with_error(&format!("Error reading configuration - {} ", err))
    });
    let mut viewport: Viewport = args
        .value_of("extent")
        .map(|s| {
            s.parse::<Viewport>()
                .unwrap_or_else(|err| exit_with_error(&err))
        })
        .unwrap_or_else(|| exit_with_error("Missing 'extent'"));
    if let Some(scale) = parse_arg::<f64>(args, "scale", "float") {
        viewport = viewport.with_scale(scale);
    }
    if let Some(dpi) = parse_arg::<f64>(args, "dpi", "float") {
        viewport = viewport.with_dpi(dpi);
    }

    let layer = overlay
        .update(&viewport)
        .unwrap_or_else(|err| exit_with_error(&format!("{}", err)));
    info!(
        "{} tiles at zoom level {} ({}px)",
        layer.len(),
        layer.zoom,
        layer.tile_size
    );
    match args.value_of("format").unwrap_or("geojson") {
        "geojson" => println!("{}", layer_to_geojson(layer)),
        "csv" => print!("{}", layer_to_csv(layer)),
        format => exit_with_error(&format!("Unknown output format '{}'", format)),
    }
}

fn main() {
    dotenv().ok();
    // http://kbknapp.github.io/clap-rs/clap/
    let mut app = App::new("tile_boundary")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("Web Mercator tile boundaries and z/x/y labels for a map viewport")
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"))
        .subcommand(SubCommand::with_name("grid")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--extent=[minx,miny,maxx,maxy[,srid]] 'Viewport extent (SRID 3857 or 4326, Default: 3857)'
                                              -c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --tile-type=[xyz|vector] 'Tile size preset'
                                              --zoom=[LEVEL] 'Fixed zoom level'
                                              --maxzoom=[LEVEL] 'Maximum estimated zoom level'
                                              --scale=[DENOMINATOR] 'Display scale for zoom level estimation'
                                              --dpi=[DPI] 'Screen DPI (Default: 96)'
                                              --format=[geojson|csv] 'Output format (Default: geojson)'")
                        .about("Print tile boundaries covering a viewport"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", BoundaryOverlay::gen_config());
            }
            ("grid", Some(sub_m)) => {
                init_logger(sub_m);
                grid(sub_m);
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
