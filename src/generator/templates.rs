//! Go source rendering
//!
//! Every flavour starts with the basic output: the file header, the package
//! clause and imports, then for each enum its type, its `const` block and a
//! `String()` method. The scanner and encoding flavours add methods after
//! each enum.

use super::{GenerationContext, GeneratorKind};
use crate::parser::ast::{Document, EnumDefinition};
use std::fmt::{self, Write};

/// `time.ANSIC`
const ANSIC: &str = "%a %b %e %H:%M:%S %Y";

pub(crate) fn write_document<W: Write>(
    out: &mut W,
    kind: GeneratorKind,
    doc: &Document,
    ctx: &GenerationContext,
) -> fmt::Result {
    write_header(out, doc, ctx, kind.imports())?;
    for def in &doc.enums {
        writeln!(out)?;
        write_basic(out, def)?;
        match kind {
            GeneratorKind::Std => {}
            GeneratorKind::FmtScanner => {
                write_scan_string(out, def)?;
                write_fmt_scan(out, def)?;
            }
            GeneratorKind::SqlScanner => {
                write_scan_string(out, def)?;
                write_sql_scan(out, def)?;
            }
            GeneratorKind::Json => {
                write_scan_string(out, def)?;
                write_json(out, def)?;
            }
            GeneratorKind::Xml => {
                write_scan_string(out, def)?;
                write_xml(out, def)?;
            }
        }
    }
    Ok(())
}

fn write_header<W: Write>(
    out: &mut W,
    doc: &Document,
    ctx: &GenerationContext,
    imports: &[&str],
) -> fmt::Result {
    writeln!(out, "// DO NOT EDIT.")?;
    writeln!(out, "//")?;
    writeln!(out, "// Generated: {}", ctx.generated_at.format(ANSIC))?;
    writeln!(out, "// From:      {}", ctx.filename)?;
    writeln!(out, "// By:        {}", ctx.user)?;
    writeln!(out, "//")?;
    writeln!(out)?;
    writeln!(out, "package {}", doc.package)?;
    if !imports.is_empty() {
        writeln!(out)?;
        writeln!(out, "import (")?;
        for import in imports {
            writeln!(out, "\t\"{}\"", import)?;
        }
        writeln!(out, ")")?;
    }
    Ok(())
}

fn write_basic<W: Write>(out: &mut W, def: &EnumDefinition) -> fmt::Result {
    let t = &def.type_name;
    writeln!(out, "type {} {}", t, def.base_type)?;
    writeln!(out)?;
    writeln!(out, "const (")?;
    writeln!(out, "\t{t}_Zero_ {t} = iota")?;
    for e in &def.enumerators {
        writeln!(out, "\t{}_{}", t, e.name)?;
    }
    writeln!(out, ")")?;
    writeln!(out)?;
    writeln!(out, "func (v {t}) String() string {{")?;
    writeln!(out, "\tswitch v {{")?;
    writeln!(out, "\tcase {t}_Zero_:")?;
    writeln!(out, "\t\treturn \"*!!!* UNINITIALIZED {t} VALUE *!!!*\"")?;
    for e in &def.enumerators {
        writeln!(out, "\tcase {}_{}:", t, e.name)?;
        writeln!(out, "\t\treturn {}", go_quote(&e.tag))?;
    }
    writeln!(out, "\tdefault:")?;
    writeln!(out, "\t\treturn \"*!* INVALID {t} VALUE *!*\"")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "}}")
}

fn write_scan_string<W: Write>(out: &mut W, def: &EnumDefinition) -> fmt::Result {
    let t = &def.type_name;
    writeln!(out)?;
    writeln!(out, "func (v *{t}) scanString(s string) error {{")?;
    writeln!(out, "\tswitch s {{")?;
    writeln!(out, "\tcase \"0\":")?;
    writeln!(out, "\t\t*v = {t}_Zero_")?;
    for e in &def.enumerators {
        writeln!(out, "\tcase {}:", go_quote(&e.tag))?;
        writeln!(out, "\t\t*v = {}_{}", t, e.name)?;
    }
    writeln!(out, "\tdefault:")?;
    writeln!(
        out,
        "\t\treturn fmt.Errorf(\"*!* INVALID {t} LITERAL: %q *!*\", s)"
    )?;
    writeln!(out, "\t}}")?;
    writeln!(out, "\treturn nil")?;
    writeln!(out, "}}")
}

fn write_fmt_scan<W: Write>(out: &mut W, def: &EnumDefinition) -> fmt::Result {
    let t = &def.type_name;
    writeln!(out)?;
    writeln!(out, "func (v *{t}) Scan(state fmt.ScanState, verb rune) error {{")?;
    writeln!(out, "\ttoken, err := state.Token(true, nil)")?;
    writeln!(out, "\tif err != nil {{")?;
    writeln!(out, "\t\treturn err")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "\treturn v.scanString(string(token))")?;
    writeln!(out, "}}")
}

fn write_sql_scan<W: Write>(out: &mut W, def: &EnumDefinition) -> fmt::Result {
    let t = &def.type_name;
    writeln!(out)?;
    writeln!(out, "func (v *{t}) Scan(src interface{{}}) error {{")?;
    writeln!(out, "\tswitch s := src.(type) {{")?;
    writeln!(out, "\tcase string:")?;
    writeln!(out, "\t\treturn v.scanString(s)")?;
    writeln!(out, "\tcase []byte:")?;
    writeln!(out, "\t\treturn v.scanString(string(s))")?;
    writeln!(out, "\tdefault:")?;
    writeln!(
        out,
        "\t\treturn fmt.Errorf(\"*!* CANNOT SCAN %T INTO {t} *!*\", src)"
    )?;
    writeln!(out, "\t}}")?;
    writeln!(out, "}}")
}

fn write_json<W: Write>(out: &mut W, def: &EnumDefinition) -> fmt::Result {
    let t = &def.type_name;
    writeln!(out)?;
    writeln!(out, "func (v {t}) MarshalJSON() ([]byte, error) {{")?;
    writeln!(out, "\treturn json.Marshal(v.String())")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "func (v *{t}) UnmarshalJSON(data []byte) error {{")?;
    writeln!(out, "\tvar s string")?;
    writeln!(out, "\tif err := json.Unmarshal(data, &s); err != nil {{")?;
    writeln!(out, "\t\treturn err")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "\treturn v.scanString(s)")?;
    writeln!(out, "}}")
}

fn write_xml<W: Write>(out: &mut W, def: &EnumDefinition) -> fmt::Result {
    let t = &def.type_name;
    writeln!(out)?;
    writeln!(
        out,
        "func (v {t}) MarshalXML(e *xml.Encoder, start xml.StartElement) error {{"
    )?;
    writeln!(out, "\treturn e.EncodeElement(v.String(), start)")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(
        out,
        "func (v *{t}) UnmarshalXML(d *xml.Decoder, start xml.StartElement) error {{"
    )?;
    writeln!(out, "\tvar s string")?;
    writeln!(out, "\tif err := d.DecodeElement(&s, &start); err != nil {{")?;
    writeln!(out, "\t\treturn err")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "\treturn v.scanString(s)")?;
    writeln!(out, "}}")
}

/// Tags are copied verbatim from the source, so they need quoting before
/// they can sit inside a Go string literal.
pub(crate) fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for ch in s.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{:04x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
