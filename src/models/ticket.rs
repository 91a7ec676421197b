/// Ticket de Jira, solo con los campos que usa la generación
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
}
