use rocket::{Route, State};
use rocket::http::{ContentType, Status};
use crate::api::Commands;
use crate::pipeline::{MetarService, Reply};

pub(crate) fn routes() -> Vec<Route> {
    rocket::routes![run]
}

fn respond(reply: Reply) -> (Status, (ContentType, Vec<u8>)) {
    match reply {
        Reply::Image(jpeg) => (Status::Ok, (ContentType::JPEG, jpeg)),
        Reply::Prompt(text) => (Status::BadRequest, (ContentType::Plain, text.into_bytes())),
        Reply::Failure(text) => (Status::InternalServerError, (ContentType::Plain, text.into_bytes())),
    }
}

#[rocket::get("/<command>?<icao>")]
async fn run(
    commands: &State<Commands>,
    service: &State<MetarService>,
    command: &str,
    icao: Option<&str>,
) -> Option<(Status, (ContentType, Vec<u8>))> {
    if !commands.answers_to(command) {
        return None;
    }

    Some(respond(service.command(icao).await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_statuses() {
        assert_eq!(respond(Reply::Image(vec![0xff, 0xd8])).0, Status::Ok);
        assert_eq!(respond(Reply::Image(vec![])).1 .0, ContentType::JPEG);
        assert_eq!(respond(Reply::Prompt("?".into())).0, Status::BadRequest);
        assert_eq!(respond(Reply::Failure("!".into())).1 .0, ContentType::Plain);
    }
}
