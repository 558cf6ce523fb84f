use std::error::Error;
use std::fmt;

use crate::department::Department;
use crate::personnel::{Client, Employee, Sex};

pub type Result<T> = std::result::Result<T, CompanyError>;

/// Company and its related methods represent the main API for managing
/// employee and client records.  Both collections are plain
/// insertion-ordered lists: the identity document is the lookup key for
/// every search/update/delete, but uniqueness is not enforced on add, so
/// duplicates are representable and the aggregates count them.
pub struct Company {
    name: String,
    tax_id: String,
    address: String,
    employees: Vec<Employee>,
    clients: Vec<Client>,
}

impl Company {
    /// Initialize a company with empty record collections.  All data lives
    /// in memory and is lost on exit.
    pub fn new(name: &str, tax_id: &str, address: &str) -> Self {
        Company {
            name: String::from(name),
            tax_id: String::from(tax_id),
            address: String::from(address),
            employees: Vec::new(),
            clients: Vec::new(),
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn tax_id(&self) -> &String {
        &self.tax_id
    }

    pub fn address(&self) -> &String {
        &self.address
    }

    pub fn employees(&self) -> &Vec<Employee> {
        &self.employees
    }

    pub fn clients(&self) -> &Vec<Client> {
        &self.clients
    }

    /// Append an employee record.  No uniqueness check on the identity
    /// document.  This method takes ownership of the Employee data; the
    /// personnel module provides a builder to make construction readable.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn add_client(&mut self, client: Client) {
        self.clients.push(client);
    }

    /// Remove every employee whose identity document matches.  The document
    /// is first stripped from every other employee's subordinate list, so
    /// no boss keeps an edge to a removed record.
    pub fn remove_employee(&mut self, document: &str) -> Result<()> {
        for employee in &mut self.employees {
            employee.subordinates_mut().retain(|sub| sub != document);
        }

        let before = self.employees.len();
        self.employees.retain(|e| e.document() != document);

        if self.employees.len() == before {
            return Err(CompanyError::EmployeeNotFound);
        }
        Ok(())
    }

    /// Remove every client whose identity document matches.
    pub fn remove_client(&mut self, document: &str) -> Result<()> {
        let before = self.clients.len();
        self.clients.retain(|c| c.document() != document);

        if self.clients.len() == before {
            return Err(CompanyError::ClientNotFound);
        }
        Ok(())
    }

    /// Replace the first employee whose identity document matches.  The old
    /// record is discarded wholesale, subordinate list included.
    pub fn update_employee(&mut self, document: &str, new_employee: Employee) -> Result<()> {
        let index = self
            .employees
            .iter()
            .position(|e| e.document() == document)
            .ok_or(CompanyError::EmployeeNotFound)?;

        self.employees[index] = new_employee;
        Ok(())
    }

    /// Replace the first client whose identity document matches.
    pub fn update_client(&mut self, document: &str, new_client: Client) -> Result<()> {
        let index = self
            .clients
            .iter()
            .position(|c| c.document() == document)
            .ok_or(CompanyError::ClientNotFound)?;

        self.clients[index] = new_client;
        Ok(())
    }

    /// First employee whose identity document matches, in insertion order.
    pub fn find_employee(&self, document: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.document() == document)
    }

    pub fn find_client(&self, document: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.document() == document)
    }

    /// Sum of all employee salaries, duplicate documents included.
    pub fn total_payroll(&self) -> f64 {
        self.employees.iter().map(|e| e.salary()).sum()
    }

    pub fn payroll_by_department(&self, department: Department) -> f64 {
        self.employees
            .iter()
            .filter(|e| e.department() == department)
            .map(|e| e.salary())
            .sum()
    }

    /// Share of clients with the given sex, as a percentage of all clients.
    /// Returns 0.0 when there are no clients.
    pub fn client_sex_percentage(&self, sex: Sex) -> f64 {
        let total = self.clients.len();
        if total == 0 {
            return 0.0;
        }

        let matching = self.clients.iter().filter(|c| c.sex() == sex).count();
        (matching as f64 / total as f64) * 100.0
    }

    /// Number of employees whose title name matches exactly,
    /// case-sensitive.
    pub fn count_employees_by_title(&self, title_name: &str) -> usize {
        self.employees
            .iter()
            .filter(|e| e.title().name == title_name)
            .count()
    }

    /// Employee with the minimum hire year.  Ties resolve to the first such
    /// employee in insertion order.  This is a MIN over the recorded year,
    /// not elapsed time against the current date.
    pub fn longest_tenured_employee(&self) -> Option<&Employee> {
        let mut best: Option<&Employee> = None;

        for employee in &self.employees {
            match best {
                Some(current) if current.year_hired() <= employee.year_hired() => {}
                _ => best = Some(employee),
            }
        }

        best
    }

    /// Record that the employee with `sub_document` reports to the one with
    /// `boss_document`.  Self-assignment and duplicate edges are rejected;
    /// the subordinate document itself is not required to exist in the
    /// store.
    pub fn add_subordinate(&mut self, boss_document: &str, sub_document: &str) -> Result<()> {
        if boss_document == sub_document {
            return Err(CompanyError::SelfSubordinate);
        }

        let boss = self
            .employees
            .iter_mut()
            .find(|e| e.document() == boss_document)
            .ok_or(CompanyError::EmployeeNotFound)?;

        if boss.subordinates().iter().any(|d| d == sub_document) {
            return Err(CompanyError::SubordinateAlreadyAssigned);
        }

        boss.subordinates_mut().push(String::from(sub_document));
        Ok(())
    }

    pub fn remove_subordinate(&mut self, boss_document: &str, sub_document: &str) -> Result<()> {
        let boss = self
            .employees
            .iter_mut()
            .find(|e| e.document() == boss_document)
            .ok_or(CompanyError::EmployeeNotFound)?;

        let index = boss
            .subordinates()
            .iter()
            .position(|d| d == sub_document)
            .ok_or(CompanyError::SubordinateNotFound)?;

        boss.subordinates_mut().remove(index);
        Ok(())
    }

    /// Subordinate identity documents of the given boss, in assignment
    /// order.
    pub fn subordinates(&self, boss_document: &str) -> Result<&Vec<String>> {
        self.find_employee(boss_document)
            .map(|e| e.subordinates())
            .ok_or(CompanyError::EmployeeNotFound)
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Empresa: {}, NIT: {}, Dirección: {}",
            self.name, self.tax_id, self.address
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CompanyError {
    EmployeeNotFound,
    ClientNotFound,
    SelfSubordinate,
    SubordinateAlreadyAssigned,
    SubordinateNotFound,
}

impl fmt::Display for CompanyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::CompanyError::*;

        match self {
            EmployeeNotFound => write!(f, "Empleado no encontrado."),
            ClientNotFound => write!(f, "Cliente no encontrado."),
            SelfSubordinate => write!(f, "Un empleado no puede ser su propio subordinado."),
            SubordinateAlreadyAssigned => write!(f, "El subordinado ya está asignado a ese jefe."),
            SubordinateNotFound => write!(f, "Subordinado no encontrado."),
        }
    }
}

impl Error for CompanyError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> Company {
        Company::new("Mi Empresa", "123456789", "Calle Ejemplo 123")
    }

    fn employee(document: &str, salary: f64, department: Department, year: i32) -> Employee {
        let mut builder = Employee::builder();
        builder
            .name(&format!("Empleado {}", document))
            .identity_document(document)
            .sex(Sex::Male)
            .email(&format!("{}@empresa.com", document))
            .salary(salary)
            .department(department)
            .year_hired(year)
            .title("analista", 3);
        builder.build().unwrap()
    }

    fn client(document: &str, sex: Sex) -> Client {
        let mut builder = Client::builder();
        builder
            .name(&format!("Cliente {}", document))
            .identity_document(document)
            .sex(sex)
            .email(&format!("{}@correo.com", document))
            .address("Calle 1")
            .phone("5551234");
        builder.build().unwrap()
    }

    #[test]
    fn find_after_remove_returns_none() {
        let mut company = company();
        company.add_employee(employee("100", 1000.0, Department::Sales, 2018));
        assert!(company.find_employee("100").is_some());

        company.remove_employee("100").unwrap();
        assert!(company.find_employee("100").is_none());

        company.add_client(client("200", Sex::Female));
        company.remove_client("200").unwrap();
        assert!(company.find_client("200").is_none());
    }

    #[test]
    fn remove_misses_are_signaled() {
        let mut company = company();
        assert_eq!(
            company.remove_employee("nadie"),
            Err(CompanyError::EmployeeNotFound)
        );
        assert_eq!(
            company.remove_client("nadie"),
            Err(CompanyError::ClientNotFound)
        );
    }

    #[test]
    fn remove_employee_drops_duplicates_too() {
        let mut company = company();
        company.add_employee(employee("100", 1000.0, Department::Sales, 2018));
        company.add_employee(employee("100", 2000.0, Department::Management, 2012));

        company.remove_employee("100").unwrap();
        assert!(company.employees().is_empty());
    }

    #[test]
    fn total_payroll_includes_duplicates() {
        let mut company = company();
        company.add_employee(employee("100", 1000.0, Department::Sales, 2018));
        company.add_employee(employee("100", 2500.5, Department::Sales, 2019));
        company.add_employee(employee("300", 1500.0, Department::Operations, 2020));

        assert!((company.total_payroll() - 5000.5).abs() < 1e-9);
    }

    #[test]
    fn payroll_by_department_filters_on_department() {
        let mut company = company();
        company.add_employee(employee("100", 1000.0, Department::Sales, 2018));
        company.add_employee(employee("200", 2000.0, Department::Sales, 2019));
        company.add_employee(employee("300", 4000.0, Department::Management, 2010));

        assert!((company.payroll_by_department(Department::Sales) - 3000.0).abs() < 1e-9);
        assert!((company.payroll_by_department(Department::Management) - 4000.0).abs() < 1e-9);
        assert!(company.payroll_by_department(Department::Operations).abs() < 1e-9);
    }

    #[test]
    fn sex_percentage_is_zero_without_clients() {
        let company = company();
        for sex in Sex::ALL {
            assert_eq!(company.client_sex_percentage(sex), 0.0);
        }
    }

    #[test]
    fn sex_percentages_sum_to_one_hundred() {
        let mut company = company();
        company.add_client(client("1", Sex::Male));
        company.add_client(client("2", Sex::Male));
        company.add_client(client("3", Sex::Female));
        company.add_client(client("4", Sex::Other));

        let sum: f64 = Sex::ALL
            .iter()
            .map(|&sex| company.client_sex_percentage(sex))
            .sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn sex_percentage_two_male_one_female() {
        let mut company = company();
        company.add_client(client("1", Sex::Male));
        company.add_client(client("2", Sex::Male));
        company.add_client(client("3", Sex::Female));

        assert!((company.client_sex_percentage(Sex::Male) - 200.0 / 3.0).abs() < 1e-9);
        assert!((company.client_sex_percentage(Sex::Female) - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(company.client_sex_percentage(Sex::Other), 0.0);
    }

    #[test]
    fn count_employees_by_title_is_exact_match() {
        let mut company = company();
        company.add_employee(employee("100", 1000.0, Department::Sales, 2018));
        company.add_employee(employee("200", 1000.0, Department::Sales, 2019));

        assert_eq!(company.count_employees_by_title("analista"), 2);
        assert_eq!(company.count_employees_by_title("Analista"), 0);
        assert_eq!(company.count_employees_by_title("gerente"), 0);
    }

    #[test]
    fn longest_tenured_is_minimum_year_first_on_tie() {
        let mut company = company();
        assert!(company.longest_tenured_employee().is_none());

        company.add_employee(employee("b", 1000.0, Department::Sales, 2015));
        company.add_employee(employee("a", 1000.0, Department::Sales, 2010));
        company.add_employee(employee("c", 1000.0, Department::Sales, 2010));

        let senior = company.longest_tenured_employee().unwrap();
        assert_eq!(senior.document(), "a");
        assert_eq!(senior.year_hired(), 2010);
    }

    #[test]
    fn update_replaces_first_match_in_place() {
        let mut company = company();
        company.add_employee(employee("100", 1000.0, Department::Sales, 2018));
        company.add_employee(employee("200", 1000.0, Department::Sales, 2019));

        company
            .update_employee("100", employee("100", 9000.0, Department::Management, 2001))
            .unwrap();

        let updated = company.find_employee("100").unwrap();
        assert_eq!(updated.department(), Department::Management);
        assert_eq!(updated.year_hired(), 2001);
        // order preserved
        assert_eq!(company.employees()[0].document(), "100");
        assert_eq!(company.employees()[1].document(), "200");
    }

    #[test]
    fn update_misses_are_signaled() {
        let mut company = company();
        let result =
            company.update_employee("nadie", employee("nadie", 1.0, Department::Sales, 2020));
        assert_eq!(result, Err(CompanyError::EmployeeNotFound));

        let result = company.update_client("nadie", client("nadie", Sex::Other));
        assert_eq!(result, Err(CompanyError::ClientNotFound));
    }

    #[test]
    fn add_subordinate_rejects_self_and_duplicates() {
        let mut company = company();
        company.add_employee(employee("jefe", 3000.0, Department::Management, 2005));

        assert_eq!(
            company.add_subordinate("jefe", "jefe"),
            Err(CompanyError::SelfSubordinate)
        );

        company.add_subordinate("jefe", "100").unwrap();
        assert_eq!(
            company.add_subordinate("jefe", "100"),
            Err(CompanyError::SubordinateAlreadyAssigned)
        );
    }

    #[test]
    fn subordinate_may_reference_untracked_document() {
        let mut company = company();
        company.add_employee(employee("jefe", 3000.0, Department::Management, 2005));

        company.add_subordinate("jefe", "fantasma").unwrap();
        assert_eq!(company.subordinates("jefe").unwrap(), &vec![
            String::from("fantasma")
        ]);
        assert!(company.find_employee("fantasma").is_none());
    }

    #[test]
    fn remove_subordinate_signals_missing_edge() {
        let mut company = company();
        company.add_employee(employee("jefe", 3000.0, Department::Management, 2005));

        assert_eq!(
            company.remove_subordinate("jefe", "100"),
            Err(CompanyError::SubordinateNotFound)
        );
        assert_eq!(
            company.remove_subordinate("nadie", "100"),
            Err(CompanyError::EmployeeNotFound)
        );

        company.add_subordinate("jefe", "100").unwrap();
        company.remove_subordinate("jefe", "100").unwrap();
        assert!(company.subordinates("jefe").unwrap().is_empty());
    }

    #[test]
    fn removing_employee_strips_every_subordinate_list() {
        let mut company = company();
        company.add_employee(employee("a", 1000.0, Department::Sales, 2010));
        company.add_employee(employee("b", 1000.0, Department::Sales, 2015));
        company.add_employee(employee("c", 1000.0, Department::Sales, 2020));

        company.add_subordinate("a", "c").unwrap();
        company.add_subordinate("b", "c").unwrap();

        company.remove_employee("c").unwrap();
        assert!(company.subordinates("a").unwrap().is_empty());
        assert!(company.subordinates("b").unwrap().is_empty());
        assert!(company.find_employee("c").is_none());
    }

    #[test]
    fn tenure_and_subordinate_removal_scenario() {
        let mut company = company();
        company.add_employee(employee("A", 1000.0, Department::Sales, 2010));
        company.add_employee(employee("B", 1000.0, Department::Sales, 2015));

        assert_eq!(company.longest_tenured_employee().unwrap().document(), "A");

        company.add_subordinate("A", "B").unwrap();
        company.add_subordinate("B", "A").unwrap();

        company.remove_employee("A").unwrap();
        assert!(company.subordinates("B").unwrap().is_empty());
        assert!(company.find_employee("A").is_none());
        assert_eq!(company.longest_tenured_employee().unwrap().document(), "B");
    }
}
