//! End-to-end import flow: read a populated workbook, validate the bound
//! records, and annotate the violations back onto the sheet.

use sheetmark::prelude::*;
use sheetmark::{CellComment, FillStyle, ERROR_FILL_COLOR};

#[derive(Debug, Default, PartialEq)]
struct Employee {
    name: String,
    email: String,
    age: i64,
}

impl RowRecord for Employee {
    fn schema() -> Schema<Self> {
        Schema::builder()
            .text("name", |e: &mut Employee, v| e.name = v)
            .text("email", |e, v| e.email = v)
            .integer("age", |e, v| e.age = v)
            .build()
    }
}

fn check_employee(e: &Employee) -> Result<Vec<Violation>> {
    let mut violations = Vec::new();
    if e.name.trim().is_empty() {
        violations.push(Violation::new("name", ConstraintKind::NotBlank));
    }
    if !e.email.contains('@') {
        violations.push(Violation::new("email", ConstraintKind::Email));
    }
    if e.age < 18 {
        violations.push(Violation::new("age", ConstraintKind::Min { value: 18 }));
    }
    Ok(violations)
}

fn format_message(violation: &CellViolation) -> String {
    let args = violation.message_arguments();
    match args.get("value") {
        Some(value) => format!("{} (limit {})", violation.constraint.name(), value),
        None => violation.constraint.name().to_string(),
    }
}

/// Upload data starting at row 2 (rows 0-1 are headers), columns 1..=3.
fn upload_workbook() -> Workbook {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();

    sheet.set_cell_value_at(0, 1, "Employee import").unwrap();
    sheet.set_cell_value_at(1, 1, "name").unwrap();
    sheet.set_cell_value_at(1, 2, "email").unwrap();
    sheet.set_cell_value_at(1, 3, "age").unwrap();

    let rows = [
        ("Ann", "ann@corp.se", "31"),
        ("", "bob@corp.se", "45"),
        ("Cat", "not-an-email", "17"),
    ];
    for (i, (name, email, age)) in rows.iter().enumerate() {
        let row = 2 + i as u32;
        sheet.set_cell_value_at(row, 1, *name).unwrap();
        sheet.set_cell_value_at(row, 2, *email).unwrap();
        sheet.set_cell_value_at(row, 3, *age).unwrap();
    }

    wb
}

#[test]
fn read_validate_annotate_round() {
    let mut wb = upload_workbook();
    let region = DataRegion::new(2, 1, 3).unwrap();

    // Read
    let employees: Vec<Employee> = RowReader::read(&wb, 0, &region).unwrap();
    assert_eq!(employees.len(), 3);
    assert_eq!(
        employees[0],
        Employee {
            name: "Ann".into(),
            email: "ann@corp.se".into(),
            age: 31
        }
    );

    // Validate
    let validator = RowValidator::new(check_employee, format_message);
    let errors = validator.validate(&employees, &region).unwrap();
    assert_eq!(errors.len(), 3);

    // Blank name of the second upload row: region row 1, name column 1
    let name_error = &errors.errors()[0];
    assert_eq!(name_error.constraint.name(), "NotBlank");
    assert_eq!(name_error.actual_row_index(), 3);
    assert_eq!(name_error.actual_col_index(), 1);
    assert_eq!(name_error.cell_name(), "B3");

    // Annotate
    let sheet = wb.worksheet_mut(0).unwrap();
    for error in &errors {
        sheet.mark_error(error);
    }

    // The blank-name cell is highlighted and commented
    let style = sheet.cell_style_at(3, 1).expect("marked cell has a style");
    assert_eq!(style.fill, FillStyle::solid(ERROR_FILL_COLOR));
    assert_eq!(style.fill.color(), Some(ERROR_FILL_COLOR));
    assert_eq!(sheet.comment_at(3, 1).unwrap().text, "NotBlank");

    // Cat's row collected both remaining errors on separate cells
    assert_eq!(sheet.comment_at(4, 2).unwrap().text, "Email");
    assert_eq!(sheet.comment_at(4, 3).unwrap().text, "Min (limit 18)");

    // Valid cells stay untouched
    assert!(sheet.cell_style_at(2, 1).is_none());
    assert!(!sheet.has_comment_at(2, 1));
}

#[test]
fn clearing_then_revalidating_does_not_accumulate_comments() {
    let mut wb = upload_workbook();
    let region = DataRegion::new(2, 1, 3).unwrap();

    let employees: Vec<Employee> = RowReader::read(&wb, 0, &region).unwrap();
    let validator = RowValidator::new(check_employee, format_message);
    let errors = validator.validate(&employees, &region).unwrap();

    let sheet = wb.worksheet_mut(0).unwrap();

    // Two validation cycles without clearing: messages concatenate
    for error in &errors {
        sheet.mark_error(error);
    }
    for error in &errors {
        sheet.mark_error(error);
    }
    assert_eq!(sheet.comment_at(3, 1).unwrap().text, "NotBlank, NotBlank");

    // Clearing in between keeps the report fresh
    sheet.clear_errors(&region, None);
    assert_eq!(sheet.comment_count(), 0);
    for error in &errors {
        sheet.mark_error(error);
    }
    assert_eq!(sheet.comment_at(3, 1).unwrap().text, "NotBlank");
}

#[test]
fn clear_errors_leaves_unrelated_comments_outside_region_alone() {
    let mut wb = upload_workbook();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_comment_at(0, 1, CellComment::new("reviewer", "header note"));

    let region = DataRegion::new(2, 1, 3).unwrap();
    sheet.clear_errors(&region, None);

    assert!(sheet.has_comment_at(0, 1));
}

#[test]
fn hole_detection_matches_the_upload_layout() {
    let mut wb = upload_workbook();
    let region = DataRegion::new(2, 1, 3).unwrap();

    {
        let sheet = wb.worksheet(0).unwrap();
        assert!(!sheet.has_any_blank_rows(&region, None));
    }

    // Blank out the last upload row and append a fresh one below the gap:
    // now the block has a hole
    let sheet = wb.worksheet_mut(0).unwrap();
    for col in 1..=3 {
        sheet.set_cell_value_at(4, col, CellValue::Empty).unwrap();
    }
    sheet.set_cell_value_at(5, 1, "Dan").unwrap();
    sheet.set_cell_value_at(5, 2, "dan@corp.se").unwrap();
    sheet.set_cell_value_at(5, 3, "52").unwrap();
    assert!(sheet.has_any_blank_rows(&region, None));
}

#[test]
fn indexed_binding_reads_the_same_upload() {
    #[derive(Debug, Default, PartialEq)]
    struct AgeOnly {
        age: i64,
        name: String,
    }

    impl RowRecord for AgeOnly {
        fn schema() -> Schema<Self> {
            // Declaration order differs from column order on purpose
            Schema::builder()
                .integer("age", |a: &mut AgeOnly, v| a.age = v)
                .at(3)
                .text("name", |a, v| a.name = v)
                .at(1)
                .build()
        }
    }

    let wb = upload_workbook();
    let region = DataRegion::new(2, 1, 3).unwrap();

    let rows: Vec<AgeOnly> = RowReader::read_indexed(&wb, 0, &region).unwrap();
    assert_eq!(
        rows,
        vec![
            AgeOnly {
                age: 31,
                name: "Ann".into()
            },
            AgeOnly {
                age: 45,
                name: "".into()
            },
            AgeOnly {
                age: 17,
                name: "Cat".into()
            },
        ]
    );
}
