use std::error::Error;
use std::fmt;
use std::io::{self, prelude::*, Stdin, Stdout};
use std::str::FromStr;

use chrono::prelude::*;

use crate::company::Company;
use crate::department::Department;
use crate::personnel::{Client, Employee, Sex};

pub type Result<T> = std::result::Result<T, TextInterfaceError>;

/// Numbered Spanish console menu over the company record store.  Every
/// record-store miss is reported and the loop continues; only I/O failures
/// propagate out of run().
pub struct TextInterface {
    io: TextIO,
    data: Company,
}

impl TextInterface {
    pub fn init() -> Self {
        TextInterface {
            io: TextIO {
                stdin: io::stdin(),
                stdout: io::stdout(),
            },
            data: Company::new("Mi Empresa", "123456789", "Calle Ejemplo 123"),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", self.data);

        loop {
            println!();
            println!("1. Gestionar empleados");
            println!("2. Gestionar clientes");
            println!("3. Calcular nómina");
            println!("4. Calcular nómina por dependencia");
            println!("5. Mostrar porcentajes de clientes por sexo");
            println!("6. Cantidad de empleados por cargo");
            println!("7. Empleado con más tiempo en la empresa");
            println!("8. Gestionar subordinados");
            println!("9. Salir");

            match self.prompt_u32("Selecciona una opción: ")? {
                1 => self.manage_employees()?,
                2 => self.manage_clients()?,
                3 => println!("Nómina total de la empresa: {}", self.data.total_payroll()),
                4 => {
                    let department = self.select_department("Selecciona la dependencia:")?;
                    println!(
                        "Nómina para la dependencia '{}': {}",
                        department,
                        self.data.payroll_by_department(department)
                    );
                }
                5 => self.show_sex_percentages(),
                6 => {
                    let title_name = self.prompt_string("Introduce el nombre del cargo: ")?;
                    println!(
                        "Cantidad de empleados con cargo '{}': {}",
                        title_name,
                        self.data.count_employees_by_title(&title_name)
                    );
                }
                7 => match self.data.longest_tenured_employee() {
                    Some(employee) => println!(
                        "Empleado con más tiempo en la empresa: Nombre: {}, Dependencia: {}, Año de ingreso: {}",
                        employee.name(),
                        employee.department(),
                        employee.year_hired()
                    ),
                    None => println!("No hay empleados en la empresa."),
                },
                8 => self.manage_subordinates()?,
                9 => {
                    println!("Saliendo...");
                    return Ok(());
                }
                _ => println!("Opción no válida. Inténtalo de nuevo."),
            };
        }
    }

    fn manage_employees(&mut self) -> Result<()> {
        loop {
            println!();
            println!("1. Añadir empleado");
            println!("2. Eliminar empleado");
            println!("3. Actualizar empleado");
            println!("4. Buscar empleado");
            println!("5. Volver al menú principal");

            match self.prompt_u32("Selecciona una opción: ")? {
                1 => {
                    let employee = self.read_employee_form(None)?;
                    match employee {
                        Some(employee) => {
                            self.data.add_employee(employee);
                            println!("Empleado añadido correctamente.");
                        }
                        None => println!("Faltan campos obligatorios."),
                    };
                }
                2 => {
                    let document = self
                        .prompt_string("Introduce el documento de identidad del empleado a eliminar: ")?;
                    match self.data.remove_employee(&document) {
                        Ok(()) => println!("Empleado eliminado correctamente."),
                        Err(e) => println!("{}", e),
                    };
                }
                3 => {
                    let document = self
                        .prompt_string("Introduce el documento de identidad del empleado a actualizar: ")?;
                    if self.data.find_employee(&document).is_none() {
                        println!("Empleado no encontrado.");
                        continue;
                    }

                    match self.read_employee_form(Some(&document))? {
                        Some(employee) => match self.data.update_employee(&document, employee) {
                            Ok(()) => println!("Empleado actualizado correctamente."),
                            Err(e) => println!("{}", e),
                        },
                        None => println!("Faltan campos obligatorios."),
                    };
                }
                4 => {
                    let document = self
                        .prompt_string("Introduce el documento de identidad del empleado a buscar: ")?;
                    match self.data.find_employee(&document) {
                        Some(employee) => println!("Empleado encontrado: {}", employee),
                        None => println!("Empleado no encontrado."),
                    };
                }
                5 => {
                    println!("Volviendo al menú principal...");
                    return Ok(());
                }
                _ => println!("Opción no válida. Inténtalo de nuevo."),
            };
        }
    }

    /// Shared add/update employee form.  When `document` is given the form
    /// keeps that identity document (update path); otherwise it prompts for
    /// one.  Returns Ok(None) when a required field was left empty.
    fn read_employee_form(&mut self, document: Option<&str>) -> Result<Option<Employee>> {
        let mut builder = Employee::builder();

        let name = self.prompt_string("Introduce el nombre del empleado: ")?;
        if !name.is_empty() {
            builder.name(&name);
        }

        match document {
            Some(document) => {
                builder.identity_document(document);
            }
            None => {
                let entry =
                    self.prompt_string("Introduce el documento de identidad del empleado: ")?;
                if !entry.is_empty() {
                    builder.identity_document(&entry);
                }
            }
        };

        builder.sex(self.select_sex()?);

        let email = self.prompt_string("Introduce el correo electrónico del empleado: ")?;
        if !email.is_empty() {
            builder.email(&email);
        }

        builder.salary(self.prompt_f64("Introduce el salario del empleado: ")?);
        builder.department(self.select_department("Selecciona la dependencia del empleado:")?);
        builder.year_hired(
            self.prompt_year("Introduce el año de ingreso del empleado (vacío = año actual): ")?,
        );

        let title_name = self.prompt_string("Introduce el nombre del cargo del empleado: ")?;
        let hierarchy_level =
            self.prompt_u32("Introduce el nivel jerárquico del cargo del empleado: ")?;
        if !title_name.is_empty() {
            builder.title(&title_name, hierarchy_level);
        }

        Ok(builder.build().ok())
    }

    fn manage_clients(&mut self) -> Result<()> {
        loop {
            println!();
            println!("1. Añadir cliente");
            println!("2. Eliminar cliente");
            println!("3. Actualizar cliente");
            println!("4. Buscar cliente");
            println!("5. Volver al menú principal");

            match self.prompt_u32("Selecciona una opción: ")? {
                1 => {
                    match self.read_client_form(None)? {
                        Some(client) => {
                            self.data.add_client(client);
                            println!("Cliente añadido correctamente.");
                        }
                        None => println!("Faltan campos obligatorios."),
                    };
                }
                2 => {
                    let document = self
                        .prompt_string("Introduce el documento de identidad del cliente a eliminar: ")?;
                    match self.data.remove_client(&document) {
                        Ok(()) => println!("Cliente eliminado correctamente."),
                        Err(e) => println!("{}", e),
                    };
                }
                3 => {
                    let document = self
                        .prompt_string("Introduce el documento de identidad del cliente a actualizar: ")?;
                    if self.data.find_client(&document).is_none() {
                        println!("Cliente no encontrado.");
                        continue;
                    }

                    match self.read_client_form(Some(&document))? {
                        Some(client) => match self.data.update_client(&document, client) {
                            Ok(()) => println!("Cliente actualizado correctamente."),
                            Err(e) => println!("{}", e),
                        },
                        None => println!("Faltan campos obligatorios."),
                    };
                }
                4 => {
                    let document = self
                        .prompt_string("Introduce el documento de identidad del cliente a buscar: ")?;
                    match self.data.find_client(&document) {
                        Some(client) => println!("Cliente encontrado: {}", client),
                        None => println!("Cliente no encontrado."),
                    };
                }
                5 => {
                    println!("Volviendo al menú principal...");
                    return Ok(());
                }
                _ => println!("Opción no válida. Inténtalo de nuevo."),
            };
        }
    }

    fn read_client_form(&mut self, document: Option<&str>) -> Result<Option<Client>> {
        let mut builder = Client::builder();

        let name = self.prompt_string("Introduce el nombre del cliente: ")?;
        if !name.is_empty() {
            builder.name(&name);
        }

        match document {
            Some(document) => {
                builder.identity_document(document);
            }
            None => {
                let entry =
                    self.prompt_string("Introduce el documento de identidad del cliente: ")?;
                if !entry.is_empty() {
                    builder.identity_document(&entry);
                }
            }
        };

        builder.sex(self.select_sex()?);

        let email = self.prompt_string("Introduce el correo electrónico del cliente: ")?;
        if !email.is_empty() {
            builder.email(&email);
        }

        let address = self.prompt_string("Introduce la dirección del cliente: ")?;
        if !address.is_empty() {
            builder.address(&address);
        }

        let phone = self.prompt_string("Introduce el teléfono del cliente: ")?;
        if !phone.is_empty() {
            builder.phone(&phone);
        }

        Ok(builder.build().ok())
    }

    fn manage_subordinates(&mut self) -> Result<()> {
        loop {
            println!();
            println!("1. Asignar subordinado");
            println!("2. Quitar subordinado");
            println!("3. Listar subordinados");
            println!("4. Volver al menú principal");

            match self.prompt_u32("Selecciona una opción: ")? {
                1 => {
                    let boss = self
                        .prompt_string("Introduce el documento de identidad del jefe: ")?;
                    let sub = self
                        .prompt_string("Introduce el documento de identidad del subordinado: ")?;
                    match self.data.add_subordinate(&boss, &sub) {
                        Ok(()) => println!("Subordinado asignado correctamente."),
                        Err(e) => println!("{}", e),
                    };
                }
                2 => {
                    let boss = self
                        .prompt_string("Introduce el documento de identidad del jefe: ")?;
                    let sub = self
                        .prompt_string("Introduce el documento de identidad del subordinado: ")?;
                    match self.data.remove_subordinate(&boss, &sub) {
                        Ok(()) => println!("Subordinado eliminado correctamente."),
                        Err(e) => println!("{}", e),
                    };
                }
                3 => {
                    let boss = self
                        .prompt_string("Introduce el documento de identidad del jefe: ")?;
                    self.list_subordinates(&boss);
                }
                4 => {
                    println!("Volviendo al menú principal...");
                    return Ok(());
                }
                _ => println!("Opción no válida. Inténtalo de nuevo."),
            };
        }
    }

    fn list_subordinates(&self, boss_document: &str) {
        let subordinates = match self.data.subordinates(boss_document) {
            Ok(list) => list,
            Err(e) => {
                println!("{}", e);
                return;
            }
        };

        if subordinates.is_empty() {
            println!("El empleado no tiene subordinados.");
            return;
        }

        println!("Subordinados de '{}':", boss_document);
        for document in subordinates {
            match self.data.find_employee(document) {
                Some(employee) => println!("- {}: {}", document, employee.name()),
                None => println!("- {}: (no registrado)", document),
            };
        }
    }

    fn show_sex_percentages(&self) {
        println!("Porcentaje de clientes por sexo:");
        for sex in Sex::ALL {
            println!("{}: {}%", sex.label(), self.data.client_sex_percentage(sex));
        }
        println!("Total de clientes: {}", self.data.clients().len());
    }

    fn select_sex(&mut self) -> Result<Sex> {
        loop {
            println!("Selecciona el sexo:");
            println!("1. Masculino");
            println!("2. Femenino");
            println!("3. Otro");

            match self.prompt_u32("Selecciona una opción: ")? {
                1 => return Ok(Sex::Male),
                2 => return Ok(Sex::Female),
                3 => return Ok(Sex::Other),
                _ => println!("Opción no válida. Por favor, selecciona una opción válida."),
            };
        }
    }

    fn select_department(&mut self, header: &str) -> Result<Department> {
        loop {
            println!("{}", header);
            for (index, department) in Department::ALL.iter().enumerate() {
                println!("{}: {}", index + 1, department);
            }

            let choice = self.prompt_u32("Selecciona una opción: ")? as usize;
            if choice >= 1 && choice <= Department::ALL.len() {
                return Ok(Department::ALL[choice - 1]);
            }
            println!("Opción no válida. Por favor, selecciona una opción válida.");
        }
    }

    fn prompt_string(&mut self, prompt: &str) -> Result<String> {
        let mut buffer = String::new();

        self.io.stdout.write(prompt.as_bytes())?;
        self.io.stdout.flush()?;

        let bytes = self.io.stdin.read_line(&mut buffer)?;
        if bytes == 0 {
            return Err(TextInterfaceError::IOError(io::Error::from(
                io::ErrorKind::UnexpectedEof,
            )));
        }

        Ok(String::from(buffer.trim()))
    }

    fn prompt_u32(&mut self, prompt: &str) -> Result<u32> {
        loop {
            let entry = self.prompt_string(prompt)?;
            match u32::from_str(&entry) {
                Ok(value) => return Ok(value),
                Err(_) => println!("Entrada no válida."),
            };
        }
    }

    fn prompt_f64(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let entry = self.prompt_string(prompt)?;
            match f64::from_str(&entry) {
                Ok(value) => return Ok(value),
                Err(_) => println!("Entrada no válida."),
            };
        }
    }

    /// Hire-year prompt: an empty entry defaults to the current year, the
    /// same way the add form would default a date of hire to today.
    fn prompt_year(&mut self, prompt: &str) -> Result<i32> {
        loop {
            let entry = self.prompt_string(prompt)?;
            if entry.is_empty() {
                return Ok(Local::now().year());
            }

            match i32::from_str(&entry) {
                Ok(year) => return Ok(year),
                Err(_) => println!("Entrada no válida."),
            };
        }
    }
}

struct TextIO {
    stdin: Stdin,
    stdout: Stdout,
}

#[derive(Debug)]
pub enum TextInterfaceError {
    IOError(io::Error),
}

impl Error for TextInterfaceError {}

impl fmt::Display for TextInterfaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TextInterfaceError::IOError(e) => write!(f, "Error de E/S ({})", e),
        }
    }
}

impl From<io::Error> for TextInterfaceError {
    fn from(e: io::Error) -> Self {
        TextInterfaceError::IOError(e)
    }
}
