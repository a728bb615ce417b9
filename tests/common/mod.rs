#![allow(dead_code)]

use std::io::Error;
use std::path::Path;

/// Static merchant payload as issued by the dashboard (tag `01` = `11`).
pub const STATIC_PAYLOAD: &str = "00020101021126640014ID.CO.QRIS.WWW0118936009140000000001021500000000000000103UMI51440014ID.CO.QRIS.WWW0215ID10200000000010303UMI5204581253033605802ID5922WARUNG MAKAN SEDERHANA6007JAKARTA6105123456304BC9D";

/// `STATIC_PAYLOAD` rewritten for 25000.
pub const DYNAMIC_25000: &str = "00020101021226640014ID.CO.QRIS.WWW0118936009140000000001021500000000000000103UMI51440014ID.CO.QRIS.WWW0215ID10200000000010303UMI5204581253033605405250005802ID5922WARUNG MAKAN SEDERHANA6007JAKARTA61051234563047453";

/// `STATIC_PAYLOAD` rewritten for 1500.
pub const DYNAMIC_1500: &str = "00020101021226640014ID.CO.QRIS.WWW0118936009140000000001021500000000000000103UMI51440014ID.CO.QRIS.WWW0215ID10200000000010303UMI520458125303360540415005802ID5922WARUNG MAKAN SEDERHANA6007JAKARTA61051234563047CA9";

/// `STATIC_PAYLOAD` rewritten for 7500.
pub const DYNAMIC_7500: &str = "00020101021226640014ID.CO.QRIS.WWW0118936009140000000001021500000000000000103UMI51440014ID.CO.QRIS.WWW0215ID10200000000010303UMI520458125303360540475005802ID5922WARUNG MAKAN SEDERHANA6007JAKARTA6105123456304D768";

pub fn write_requests_csv(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["reference", "amount"])?;
    for (reference, amount) in rows {
        wtr.write_record([reference, amount])?;
    }
    wtr.flush()?;
    Ok(())
}
