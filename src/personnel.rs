use std::fmt;

use crate::department::Department;

/// Sex as recorded on a person's record.  Display labels match the console
/// menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Male, Sex::Female, Sex::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Femenino",
            Sex::Other => "Otro",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Shared base record for employees and clients.  Never stored on its own;
/// embedded by composition.  The identity document is the lookup key for
/// every update/delete/search, but nothing enforces its uniqueness on add.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub identity_document: String,
    pub sex: Sex,
    pub email: String,
}

/// A named role with an integer hierarchy level.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub name: String,
    pub hierarchy_level: u32,
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (nivel {})", self.name, self.hierarchy_level)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    person: Person,
    salary: f64,
    department: Department,
    year_hired: i32,
    title: Title,
    subordinates: Vec<String>,
}

impl Employee {
    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::new()
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &String {
        &self.person.name
    }

    pub fn document(&self) -> &String {
        &self.person.identity_document
    }

    pub fn sex(&self) -> Sex {
        self.person.sex
    }

    pub fn email(&self) -> &String {
        &self.person.email
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn year_hired(&self) -> i32 {
        self.year_hired
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Identity documents of this employee's subordinates, in assignment
    /// order.  Entries are keys resolved through the company on display, so
    /// a document with no matching employee record is representable.
    pub fn subordinates(&self) -> &Vec<String> {
        &self.subordinates
    }

    pub fn subordinates_mut(&mut self) -> &mut Vec<String> {
        &mut self.subordinates
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Nombre: {}, Sexo: {}, Correo: {}, Salario: {}, Dependencia: {}, \
             Año de ingreso: {}, Cargo: {}, Nivel jerárquico: {}",
            self.person.name,
            self.person.sex,
            self.person.email,
            self.salary,
            self.department,
            self.year_hired,
            self.title.name,
            self.title.hierarchy_level,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    person: Person,
    address: String,
    phone: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &String {
        &self.person.name
    }

    pub fn document(&self) -> &String {
        &self.person.identity_document
    }

    pub fn sex(&self) -> Sex {
        self.person.sex
    }

    pub fn email(&self) -> &String {
        &self.person.email
    }

    pub fn address(&self) -> &String {
        &self.address
    }

    pub fn phone(&self) -> &String {
        &self.phone
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Nombre: {}, Sexo: {}, Correo: {}, Dirección: {}, Teléfono: {}",
            self.person.name, self.person.sex, self.person.email, self.address, self.phone,
        )
    }
}

#[derive(Debug)]
pub struct EmployeeBuilder {
    name: Option<String>,
    identity_document: Option<String>,
    sex: Option<Sex>,
    email: Option<String>,
    salary: Option<f64>,
    department: Option<Department>,
    year_hired: Option<i32>,
    title: Option<Title>,
}

impl EmployeeBuilder {
    fn new() -> Self {
        EmployeeBuilder {
            name: None,
            identity_document: None,
            sex: None,
            email: None,
            salary: None,
            department: None,
            year_hired: None,
            title: None,
        }
    }

    pub fn name(&mut self, name: &str) -> &mut Self {
        self.name = Some(String::from(name));
        self
    }

    pub fn identity_document(&mut self, document: &str) -> &mut Self {
        self.identity_document = Some(String::from(document));
        self
    }

    pub fn sex(&mut self, sex: Sex) -> &mut Self {
        self.sex = Some(sex);
        self
    }

    pub fn email(&mut self, email: &str) -> &mut Self {
        self.email = Some(String::from(email));
        self
    }

    pub fn salary(&mut self, salary: f64) -> &mut Self {
        self.salary = Some(salary);
        self
    }

    pub fn department(&mut self, department: Department) -> &mut Self {
        self.department = Some(department);
        self
    }

    pub fn year_hired(&mut self, year: i32) -> &mut Self {
        self.year_hired = Some(year);
        self
    }

    pub fn title(&mut self, name: &str, hierarchy_level: u32) -> &mut Self {
        self.title = Some(Title {
            name: String::from(name),
            hierarchy_level,
        });
        self
    }

    /// Construct an Employee from the given values.  Returns Err(Self) when
    /// a field is missing; presence is the only check performed.  Function
    /// consumes self.
    pub fn build(self) -> Result<Employee, Self> {
        if self.name.is_none()
            || self.identity_document.is_none()
            || self.sex.is_none()
            || self.email.is_none()
            || self.salary.is_none()
            || self.department.is_none()
            || self.year_hired.is_none()
            || self.title.is_none()
        {
            return Err(self);
        }

        let person = Person {
            name: self.name.unwrap(),
            identity_document: self.identity_document.unwrap(),
            sex: self.sex.unwrap(),
            email: self.email.unwrap(),
        };

        Ok(Employee {
            person,
            salary: self.salary.unwrap(),
            department: self.department.unwrap(),
            year_hired: self.year_hired.unwrap(),
            title: self.title.unwrap(),
            subordinates: Vec::new(),
        })
    }
}

#[derive(Debug)]
pub struct ClientBuilder {
    name: Option<String>,
    identity_document: Option<String>,
    sex: Option<Sex>,
    email: Option<String>,
    address: Option<String>,
    phone: Option<String>,
}

impl ClientBuilder {
    fn new() -> Self {
        ClientBuilder {
            name: None,
            identity_document: None,
            sex: None,
            email: None,
            address: None,
            phone: None,
        }
    }

    pub fn name(&mut self, name: &str) -> &mut Self {
        self.name = Some(String::from(name));
        self
    }

    pub fn identity_document(&mut self, document: &str) -> &mut Self {
        self.identity_document = Some(String::from(document));
        self
    }

    pub fn sex(&mut self, sex: Sex) -> &mut Self {
        self.sex = Some(sex);
        self
    }

    pub fn email(&mut self, email: &str) -> &mut Self {
        self.email = Some(String::from(email));
        self
    }

    pub fn address(&mut self, address: &str) -> &mut Self {
        self.address = Some(String::from(address));
        self
    }

    pub fn phone(&mut self, phone: &str) -> &mut Self {
        self.phone = Some(String::from(phone));
        self
    }

    /// Construct a Client from the given values.  Returns Err(Self) when a
    /// field is missing.  Function consumes self.
    pub fn build(self) -> Result<Client, Self> {
        if self.name.is_none()
            || self.identity_document.is_none()
            || self.sex.is_none()
            || self.email.is_none()
            || self.address.is_none()
            || self.phone.is_none()
        {
            return Err(self);
        }

        let person = Person {
            name: self.name.unwrap(),
            identity_document: self.identity_document.unwrap(),
            sex: self.sex.unwrap(),
            email: self.email.unwrap(),
        };

        Ok(Client {
            person,
            address: self.address.unwrap(),
            phone: self.phone.unwrap(),
        })
    }
}
