use crate::core::record::CoordinateRecord;
use crate::core::reference::ReferenceSequence;

/// Render one record as a tab-joined table line (without the newline).
///
/// Field order is fixed: chrom, start, end, name, pool, then strand when
/// present, then the sequence (`.` when absent). A record with a strand
/// renders as 7 columns, one without as 6.
#[must_use]
pub fn format_record(record: &CoordinateRecord) -> String {
    let mut fields = vec![
        record.chrom.clone(),
        record.start.to_string(),
        record.end.to_string(),
        record.name.clone(),
        record.pool.clone(),
    ];
    if let Some(strand) = record.strand {
        fields.push(strand.symbol().to_string());
    }
    fields.push(record.sequence.clone().unwrap_or_else(|| ".".to_string()));
    fields.join("\t")
}

/// Canonical text form of a coordinate table.
///
/// Records are sorted by `(chrom, start, end, name)` with a stable sort, so
/// the output is identical for any input ordering of the same records. Lines
/// are `\n`-terminated including the final line.
#[must_use]
pub fn canonical_records(records: &[CoordinateRecord]) -> String {
    let mut sorted: Vec<&CoordinateRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        (&a.chrom, a.start, a.end, &a.name).cmp(&(&b.chrom, b.start, b.end, &b.name))
    });

    let mut out = String::new();
    for record in sorted {
        out.push_str(&format_record(record));
        out.push('\n');
    }
    out
}

/// Canonical text form of a reference: records sorted by name, each as a
/// `>name` header line followed by the whole uppercase sequence on one line.
#[must_use]
pub fn canonical_reference(references: &[ReferenceSequence]) -> String {
    let mut sorted: Vec<&ReferenceSequence> = references.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = String::new();
    for reference in sorted {
        out.push('>');
        out.push_str(&reference.name);
        out.push('\n');
        out.push_str(reference.sequence());
        out.push('\n');
    }
    out
}
