use rocket::http::Status;
use rocket::{Rocket, Build};
use crate::config::Config;
use crate::pipeline::MetarService;

mod command;

/// Names the command answers to, both mounted at the root.
pub(crate) struct Commands {
  pub(crate) name: String,
  pub(crate) alias: String,
}

impl Commands {
  fn answers_to(&self, command: &str) -> bool {
    command == self.name || command == self.alias
  }
}

pub fn build(config: &Config, service: MetarService) -> Rocket<Build> {
  rocket::build()
    .manage(Commands { name: config.command_name.clone(), alias: config.command_alias.clone() })
    .manage(service)
    .mount("/", command::routes())
    .mount("/healthz/-", rocket::routes![ready])
}

#[rocket::get("/ready")]
async fn ready() -> Status {
  Status::Ok
}
