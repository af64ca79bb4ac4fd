// National Insurance claim form extraction and validation

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use claimform::config::Config;
use claimform::processing::export;
use claimform::{FormProcessor, ProcessedForm};

#[derive(Parser)]
#[command(
    name = "claimform",
    about = "Extract and validate National Insurance work-injury claim forms"
)]
struct Args {
    /// Path to the scanned claim form (PDF, JPG or PNG)
    document: PathBuf,

    /// Directory the extracted-data JSON is written into
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

// Function to print a detailed extraction and validation report
fn print_detailed_report(processed: &ProcessedForm) {
    let form = &processed.form;
    let report = &processed.report;

    println!("\n===============================================");
    println!("      CLAIM FORM VALIDATION DETAILED REPORT");
    println!("===============================================\n");

    println!("PERSONAL INFORMATION:");
    println!("  Last Name: {}", form.last_name);
    println!("  First Name: {}", form.first_name);
    println!("  ID Number: {}", form.id_number);
    println!("  Gender: {}", form.gender);
    println!("  Date of Birth: {}", form.date_of_birth.render());

    println!("\nADDRESS:");
    println!("  Street: {}", form.address.street);
    println!("  House Number: {}", form.address.house_number);
    println!("  Entrance: {}", form.address.entrance);
    println!("  Apartment: {}", form.address.apartment);
    println!("  City: {}", form.address.city);
    println!("  Postal Code: {}", form.address.postal_code);
    println!("  PO Box: {}", form.address.po_box);

    println!("\nCONTACT INFORMATION:");
    println!("  Landline Phone: {}", form.landline_phone);
    println!("  Mobile Phone: {}", form.mobile_phone);

    println!("\nACCIDENT INFORMATION:");
    println!("  Job Type: {}", form.job_type);
    println!("  Date of Injury: {}", form.date_of_injury.render());
    println!("  Time of Injury: {}", form.time_of_injury);
    println!("  Accident Location: {}", form.accident_location);
    println!("  Accident Address: {}", form.accident_address);
    println!("  Accident Description: {}", form.accident_description);
    println!("  Injured Body Part: {}", form.injured_body_part);

    println!("\nFORM INFORMATION:");
    println!("  Signature: {}", form.signature);
    println!("  Form Filling Date: {}", form.form_filling_date.render());
    println!(
        "  Form Receipt Date at Clinic: {}",
        form.form_receipt_date_at_clinic.render()
    );

    println!("\nMEDICAL INSTITUTION FIELDS:");
    println!(
        "  Health Fund Member: {}",
        form.medical_institution_fields.health_fund_member
    );
    println!(
        "  Nature of Accident: {}",
        form.medical_institution_fields.nature_of_accident
    );
    println!(
        "  Medical Diagnoses: {}",
        form.medical_institution_fields.medical_diagnoses
    );

    println!("\nVALIDATION CHECKS:");
    for finding in &report.validation_details {
        println!(
            "  [{}] {}: {}",
            if finding.valid { "PASS" } else { "FAIL" },
            finding.field,
            finding.message
        );
        if !finding.value.is_empty() {
            println!("         Value: {}", finding.value);
        }
    }

    println!("\nSCORES:");
    println!("  Overall Score: {:.1}%", report.overall_score);
    println!("  Completeness Score: {:.1}%", report.completeness_score);
    println!(
        "  Checks Passed: {}/{}",
        report.passed_checks, report.total_checks
    );

    println!("\nSUMMARY:");
    println!("{}", report.summary);
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let processor = FormProcessor::new(&config);
    match processor.process(&args.document) {
        Ok(processed) => {
            print_detailed_report(&processed);

            let original_name = args
                .document
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("document");
            match export::write_export(&processed.form, &args.output_dir, original_name) {
                Ok(path) => {
                    println!("\nExtracted data written to {}", path.display());
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("Error writing JSON export: {}", err);
                    ExitCode::FAILURE
                }
            }
        }
        Err(err) => {
            eprintln!("Error processing claim form: {}", err);
            ExitCode::FAILURE
        }
    }
}
