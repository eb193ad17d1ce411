//! Sample bills used to seed the in-memory store and by tests.

use shared::domain::{BillId, BillRecord, BillStatus, ExpenseType};

const RECEIPT_URL: &str = "https://localhost:3456/images/test.jpg";

pub fn bills() -> Vec<BillRecord> {
    vec![
        BillRecord {
            id: BillId::new("47qAXb6fIm2zOKkLzMro"),
            email: "a@a".into(),
            expense_type: ExpenseType::HotelEtLogement,
            name: "encore".into(),
            amount: 400.0,
            date: "2004-04-04".into(),
            vat: "80".into(),
            pct: 20,
            commentary: "séminaire billed".into(),
            file_url: Some(RECEIPT_URL.into()),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".into()),
            status: BillStatus::Pending,
            comment_admin: Some("ok".into()),
        },
        BillRecord {
            id: BillId::new("BeKy5Mo4jkmdfPGYpTxZ"),
            email: "a@a".into(),
            expense_type: ExpenseType::Transports,
            name: "test1".into(),
            amount: 100.0,
            date: "2001-01-01".into(),
            vat: String::new(),
            pct: 20,
            commentary: "plop".into(),
            file_url: Some(RECEIPT_URL.into()),
            file_name: Some("1592770761.jpeg".into()),
            status: BillStatus::Refused,
            comment_admin: Some("en fait non".into()),
        },
        BillRecord {
            id: BillId::new("UIUZtnPQvnbFnB0ozvJh"),
            email: "a@a".into(),
            expense_type: ExpenseType::ServicesEnLigne,
            name: "test3".into(),
            amount: 300.0,
            date: "2003-03-03".into(),
            vat: "60".into(),
            pct: 20,
            commentary: String::new(),
            file_url: Some(RECEIPT_URL.into()),
            file_name: Some(
                "facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png"
                    .into(),
            ),
            status: BillStatus::Accepted,
            comment_admin: Some("bon bah d'accord".into()),
        },
        BillRecord {
            id: BillId::new("qcCK3SzECmaZAGRrHjaC"),
            email: "a@a".into(),
            expense_type: ExpenseType::RestaurantsEtBars,
            name: "test2".into(),
            amount: 200.0,
            date: "2002-02-02".into(),
            vat: "40".into(),
            pct: 20,
            commentary: "test2".into(),
            file_url: None,
            file_name: None,
            status: BillStatus::Refused,
            comment_admin: Some("pas la bonne facture".into()),
        },
    ]
}
