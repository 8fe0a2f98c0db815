/// A persisted employee row. No timestamp actions apply to employees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// Caller-supplied fields for creating an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub address: String,
}
