/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod generate_request;
mod generate_response;
mod test_request;
mod test_response;

pub use generate_request::GenerateSbomRequest;
pub use generate_response::GenerateSbomResponse;
pub use test_request::TestSbomRequest;
pub use test_response::TestSbomResponse;
