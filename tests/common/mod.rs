//! Shared helpers: certificates and zip bundles generated on the fly
#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use rcgen::{
    BmpString, CertificateParams, DistinguishedName, DnType, DnValue, KeyPair, SerialNumber,
    UniversalString,
};
use std::io::{Cursor, Read, Write};
use time::OffsetDateTime;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Fixed "today" used by library-level tests
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

pub struct TestCert {
    pub der: Vec<u8>,
    pub pem: String,
}

/// ASN.1 string type used for subject attributes
#[derive(Clone, Copy)]
pub enum NameEncoding {
    Utf8,
    Bmp,
    Universal,
}

impl NameEncoding {
    fn value(self, text: &str) -> DnValue {
        match self {
            NameEncoding::Utf8 => DnValue::Utf8String(text.to_string()),
            NameEncoding::Bmp => DnValue::BmpString(BmpString::try_from(text).unwrap()),
            NameEncoding::Universal => {
                DnValue::UniversalString(UniversalString::try_from(text).unwrap())
            }
        }
    }
}

/// Subject and validity for a generated certificate
pub struct CertTemplate<'a> {
    pub name_encoding: NameEncoding,
    pub common_name: Option<&'a str>,
    pub organization: Option<&'a str>,
    pub serial: &'a [u8],
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
}

impl<'a> CertTemplate<'a> {
    /// A certificate for `name` expiring `days` after `today`
    pub fn expiring_in(name: &'a str, today: NaiveDate, days: i64) -> Self {
        Self {
            name_encoding: NameEncoding::Utf8,
            common_name: Some(name),
            organization: Some("Example Org"),
            serial: &[0x01, 0xAB, 0xCD],
            valid_from: today - Duration::days(365),
            valid_until: today + Duration::days(days),
        }
    }

    pub fn build(&self) -> TestCert {
        let mut params = CertificateParams::new(Vec::<String>::new()).unwrap();

        let mut dn = DistinguishedName::new();
        if let Some(cn) = self.common_name {
            dn.push(DnType::CommonName, self.name_encoding.value(cn));
        }
        if let Some(org) = self.organization {
            dn.push(DnType::OrganizationName, self.name_encoding.value(org));
        }
        params.distinguished_name = dn;
        params.serial_number = Some(SerialNumber::from_slice(self.serial));
        params.not_before = at_noon_utc(self.valid_from);
        params.not_after = at_noon_utc(self.valid_until);

        let key = KeyPair::generate().unwrap();
        let cert = params.self_signed(&key).unwrap();

        TestCert {
            der: cert.der().to_vec(),
            pem: cert.pem(),
        }
    }
}

fn at_noon_utc(date: NaiveDate) -> OffsetDateTime {
    let timestamp = date.and_hms_opt(12, 0, 0).unwrap().and_utc().timestamp();
    OffsetDateTime::from_unix_timestamp(timestamp).unwrap()
}

/// Build a zip archive from (name, content) pairs, in order
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        if name.ends_with('/') {
            writer
                .add_directory(name.trim_end_matches('/'), SimpleFileOptions::default())
                .unwrap();
        } else {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(content).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// Read one file out of a zip container (xlsx files are zip containers)
pub fn read_zip_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

/// Value of ` name="..."` inside an XML fragment
fn xml_attr<'a>(fragment: &'a str, name: &str) -> Option<&'a str> {
    let key = format!(" {}=\"", name);
    let start = fragment.find(&key)? + key.len();
    let end = fragment[start..].find('"')? + start;
    Some(&fragment[start..end])
}

/// Body of the first `<tag ...>...</tag>` section
fn xml_section<'a>(xml: &'a str, tag: &str) -> &'a str {
    let start = xml.find(&format!("<{}", tag)).unwrap();
    let end = xml[start..].find(&format!("</{}>", tag)).unwrap() + start;
    &xml[start..end]
}

/// Fill color (ARGB) applied to a worksheet cell such as `"A2"`, if any
pub fn cell_fill_rgb(xlsx: &[u8], cell: &str) -> Option<String> {
    let sheet = read_zip_entry(xlsx, "xl/worksheets/sheet1.xml");
    let styles = read_zip_entry(xlsx, "xl/styles.xml");

    let open = format!("<c r=\"{}\"", cell);
    let start = sheet.find(&open).unwrap();
    let end = sheet[start..].find('>').unwrap() + start;
    let style_index: usize = xml_attr(&sheet[start..end], "s")
        .map(|s| s.parse::<usize>().unwrap())
        .unwrap_or(0);

    let xf = xml_section(&styles, "cellXfs")
        .split("<xf ")
        .nth(style_index + 1)
        .unwrap();
    let fill_index: usize = xml_attr(&format!(" {}", xf), "fillId")
        .unwrap()
        .parse()
        .unwrap();

    let fill = xml_section(&styles, "fills")
        .split("<fill>")
        .nth(fill_index + 1)
        .unwrap();
    xml_attr(fill, "rgb").map(str::to_string)
}

/// `(first column, last column, width)` for every `<col>` element, 1-based
pub fn column_widths(xlsx: &[u8]) -> Vec<(u16, u16, f64)> {
    let sheet = read_zip_entry(xlsx, "xl/worksheets/sheet1.xml");
    xml_section(&sheet, "cols")
        .split("<col ")
        .skip(1)
        .map(|col| {
            let col = format!(" {}", col);
            (
                xml_attr(&col, "min").unwrap().parse::<u16>().unwrap(),
                xml_attr(&col, "max").unwrap().parse::<u16>().unwrap(),
                xml_attr(&col, "width").unwrap().parse::<f64>().unwrap(),
            )
        })
        .collect()
}
