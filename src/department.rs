use std::fmt;

/// The four fixed organizational units of the company.  Payroll reports and
/// employee records refer to departments only through this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Sales,
    HumanResources,
    Management,
    Operations,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Sales,
        Department::HumanResources,
        Department::Management,
        Department::Operations,
    ];

    /// Name as shown on the console menus and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Department::Sales => "ventas",
            Department::HumanResources => "recursos humanos",
            Department::Management => "gerencia",
            Department::Operations => "operativo",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
