use sekit::checksum::*;

fn main() {
    let numbers = [
        ("Swedish personal", "121212-1212"),
        ("Swedish personal", "19121212-1213"),
        ("Swedish organisation", "556036-0793"),
        ("Finnish personal", "131052-308T"),
        ("Finnish business ID", "01120389"),
    ];

    for (kind, number) in numbers {
        let result = match kind {
            "Swedish personal" => validate_swedish_personal_number(number),
            "Swedish organisation" => validate_swedish_organisation_number(number),
            "Finnish personal" => validate_finnish_personal_number(number),
            _ => validate_finnish_organisation_number(number),
        };
        println!("{kind:<22} {number:<15} {result}");
    }

    for vat in ["SE556036079301", "FI01120389", "DE123456789", "XX1"] {
        match validate_vat_number(vat) {
            Ok(result) => println!("VAT {vat:<16} {result}"),
            Err(e) => println!("VAT {vat:<16} not checked: {e}"),
        }
    }

    if let Some(full) = luhn_append("556036079") {
        println!("Luhn: 556036079 -> {full}");
    }
}
