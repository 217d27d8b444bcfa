// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

// Configuration abstracts config options for the catalog process
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub http_addr: String,
    pub seed_fixtures: bool,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            seed_fixtures: true,
            json_logs: branch_id == "prod",
        }
    }
}
