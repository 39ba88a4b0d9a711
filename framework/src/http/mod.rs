mod body;
mod envelope;
mod form_request;
mod request;
mod response;

pub use body::{collect_body, parse_form, parse_json};
pub use envelope::{Envelope, SUCCESS};
pub use form_request::FormRequest;
pub use request::Request;
pub use response::{HttpResponse, Response};
