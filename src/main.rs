// Ex. 2: console-driven record manager for a fictitious company.  Employees
// and clients are held in memory and managed through a numbered menu, with
// aggregate reports (payroll, payroll by department, client sex percentages,
// employee count by title, longest tenured employee) and a boss/subordinate
// assignment list.  All data is lost on exit.
use empresa::textinterface::TextInterface;

fn main() {
    let mut interface = TextInterface::init();

    interface.run().expect("error de E/S");
}
