use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn year(&self) -> i64;

    // one-line form shared by the console listing and lookups
    fn summary(&self) -> String {
        format!("ID: {} | Title: {} | Author: {} | Year: {}",
                self.id(), self.title(), self.author(), self.year())
    }
}
