use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sekit::core::*;
use sekit::sql::*;

fn main() {
    let ctx = ContextBuilder::new("SE01")
        .dialect(Dialect::SqlServer)
        .build();

    // Plain INSERT with a mix of literal kinds
    let mut insert = InsertBuilder::for_context(&ctx);
    insert.set_table("se_supplier_note");
    insert.add("client", ctx.client.as_str()).unwrap();
    insert.add("supplier_id", "S100").unwrap();
    insert.add_truncated("note", "Paid late; contact O'Brien in accounting", 30).unwrap();
    insert.add("amount", dec!(1250.50)).unwrap();
    insert
        .add("due", NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
        .unwrap();
    insert.add_now("last_update");
    println!("{}", insert.render().unwrap());

    // INSERT ... SELECT from another table
    let mut copy = InsertBuilder::new(Dialect::Asql, "se_report");
    copy.add_raw("client", "h.client")
        .add_raw("supplier_id", "h.apar_id")
        .set_where("WHERE h.client = 'SE01'");
    copy.set_from("asuheader h").distinct(true);
    println!("{}", copy.render().unwrap());

    // UPDATE on Oracle; booleans render as 1/0
    let mut update = UpdateBuilder::new(Dialect::Oracle, "se_supplier");
    update.add("blocked", true).unwrap();
    update.add("blocked_by", "SYSTEM").unwrap();
    update.set_where("WHERE supplier_id = 'S100'");
    println!("{}", update.render().unwrap());

    // Extension column
    match add_column_statement(Dialect::Oracle, "se_supplier", "risk_class", "char", Some(2)) {
        Ok(sql) => println!("{sql}"),
        Err(e) => eprintln!("{e}"),
    }

    // Errors are values, not panics
    let empty = UpdateBuilder::new(Dialect::SqlServer, "se_supplier");
    match empty.render() {
        Ok(sql) => println!("{sql}"),
        Err(e) => eprintln!("cannot render: {e}"),
    }
}
