//! Plain-text summary encoder.

use crate::table::file_name;
use crate::ExportArtifact;
use chrono::Local;
use dl_core::record::PersonRecord;

/// Title line of the summary.
pub const TITLE: &str = "INFORMACIÓN DE USUARIO";

/// Separator rule above and below the field block.
const RULE: &str = "----------------------";

/// Timestamp format for the generation line, matching the deployment
/// locale's date/time rendering.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Renders the fixed human-readable template for a record.
///
/// The five labeled fields appear in the same order as the tabular exports,
/// followed by a generation timestamp in local time. Infallible: the
/// template is pure string formatting.
pub fn encode(record: &PersonRecord) -> ExportArtifact {
    let generated = Local::now().format(TIMESTAMP_FORMAT);
    let content = format!(
        "{title}\n\
         {rule}\n\
         Nombre: {first}\n\
         Apellido: {last}\n\
         Documento: {document}\n\
         Email: {email}\n\
         Teléfono: {phone}\n\
         {rule}\n\
         Generado el: {generated}\n",
        title = TITLE,
        rule = RULE,
        first = record.first_name,
        last = record.last_name,
        document = record.document_number,
        email = record.email,
        phone = record.phone,
        generated = generated,
    );

    ExportArtifact {
        file_name: file_name(record.document_number, "txt"),
        bytes: content.into_bytes(),
    }
}
