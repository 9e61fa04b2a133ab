use std::path::{Path, PathBuf};
use anyhow::{bail, Context};
use structopt::StructOpt;
use metar_image::config::Config;
use metar_image::pipeline::Reply;

#[macro_use]
extern crate log;

#[derive(Debug, StructOpt)]
struct Cli {
    /// config file
    #[structopt(long = "config", short = "c", default_value = "config.yaml")]
    config_file: String,

    #[structopt(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Debug, StructOpt)]
enum Cmd {
    /// Render the report of one airport to a file instead of serving
    Query {
        icao: String,

        #[structopt(long = "output", short = "o", default_value = "metar.jpg")]
        output: PathBuf,
    },
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {

  std::env::var("RUST_LOG").map_err(|_| {
      std::env::set_var("RUST_LOG", "error,metar_image=info");
  }).unwrap_or_default();
  env_logger::init();

  let args = Cli::from_args();

  let config = Config::load(Path::new(&args.config_file))
      .with_context(|| format!("loading config {}", args.config_file))?;
  let service = metar_image::service(&config)?;

  match args.cmd {
    Some(Cmd::Query { icao, output }) => {
      match service.command(Some(&icao)).await {
        Reply::Image(jpeg) => {
          std::fs::write(&output, jpeg)?;
          info!("`{}` written to {}", icao, output.display());
        },
        Reply::Prompt(text) | Reply::Failure(text) => bail!(text),
      }
    },
    None => {
      if let Err(e) = metar_image::api::build(&config, service).launch().await {
        error!("Error launching server : {:?}", e);
      }
    }
  }

  Ok(())
}
