use rocket::{Request, catch};

#[catch(400)]
pub fn bad_request(_req: &Request) -> &'static str {
    "Bad request: the submitted tally could not be read"
}

#[catch(404)]
pub fn not_found(_req: &Request) -> &'static str {
    "Page not found"
}

#[catch(422)]
pub fn unprocessable_entity(_req: &Request) -> &'static str {
    "Province name and both vote counts are required; vote counts must be whole numbers"
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> &'static str {
    "Internal Server Error"
}
