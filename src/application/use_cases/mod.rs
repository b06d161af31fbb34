/// Use cases module containing application business logic orchestration
mod generate_sbom;
mod test_sbom;

pub use generate_sbom::GenerateSbomUseCase;
pub use test_sbom::TestSbomUseCase;
