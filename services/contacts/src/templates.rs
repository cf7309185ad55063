//! HTML rendering for the contact pages
//!
//! The presentation boundary: handlers pass a plain record list and an
//! optional status message, this module returns complete pages. Status
//! messages surface as a JavaScript alert fired on page load, never as
//! persisted page content.

use axum::response::Html;

use crate::models::User;
use crate::validation::escape_html;

const FORM_PAGE_STYLE: &str = r##"<style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            font-family: Arial, sans-serif;
            background-color: #f3f4f6;
            color: #333;
        }
        .container {
            width: 100%;
            max-width: 400px;
            padding: 2rem;
            background-color: #fff;
            box-shadow: 0px 4px 8px rgba(0, 0, 0, 0.1);
            border-radius: 8px;
        }
        h1 {
            font-size: 24px;
            margin-bottom: 1.5rem;
            text-align: center;
            color: #4a90e2;
        }
        form { display: flex; flex-direction: column; }
        label { font-size: 14px; margin-bottom: 0.5rem; color: #666; }
        input[type="text"], input[type="tel"] {
            padding: 0.75rem;
            margin-bottom: 1.5rem;
            font-size: 16px;
            border: 1px solid #ccc;
            border-radius: 4px;
        }
        input[type="text"]:focus, input[type="tel"]:focus {
            border-color: #4a90e2;
            outline: none;
        }
        .button-container { display: flex; justify-content: space-between; }
        button {
            padding: 0.75rem;
            font-size: 16px;
            font-weight: bold;
            color: #fff;
            background-color: #4a90e2;
            border: none;
            border-radius: 4px;
            cursor: pointer;
            width: 48%;
        }
        button:hover { background-color: #357ab8; }
    </style>"##;

const RECORDS_PAGE_STYLE: &str = r##"<style>
        body { padding: 20px; }
        table { margin-top: 20px; }
        .modal-header, .modal-footer { border: none; }
    </style>"##;

const RECORDS_MODALS: &str = r##"    <!-- Edit Modal -->
    <div class="modal fade" id="editModal" tabindex="-1" role="dialog" aria-labelledby="editModalLabel" aria-hidden="true">
        <div class="modal-dialog" role="document">
            <div class="modal-content">
                <div class="modal-header">
                    <h5 class="modal-title" id="editModalLabel">Edit User</h5>
                    <button type="button" class="close" data-dismiss="modal" aria-label="Close">
                        <span aria-hidden="true">&times;</span>
                    </button>
                </div>
                <div class="modal-body">
                    <form id="editForm" method="POST">
                        <input type="hidden" id="editId" name="id">
                        <div class="form-group">
                            <label for="editFirstName">First Name</label>
                            <input type="text" class="form-control" id="editFirstName" name="firstname" required>
                        </div>
                        <div class="form-group">
                            <label for="editSecondName">Second Name</label>
                            <input type="text" class="form-control" id="editSecondName" name="secondname" required>
                        </div>
                        <div class="form-group">
                            <label for="editLastName">Last Name</label>
                            <input type="text" class="form-control" id="editLastName" name="lastname" required>
                        </div>
                        <div class="form-group">
                            <label for="editPhone">Phone Number</label>
                            <input type="text" class="form-control" id="editPhone" name="phone" required>
                        </div>
                        <button type="submit" name="update" class="btn btn-primary">Update</button>
                    </form>
                </div>
            </div>
        </div>
    </div>

    <!-- Delete Modal -->
    <div class="modal fade" id="deleteModal" tabindex="-1" role="dialog" aria-labelledby="deleteModalLabel" aria-hidden="true">
        <div class="modal-dialog" role="document">
            <div class="modal-content">
                <div class="modal-header">
                    <h5 class="modal-title" id="deleteModalLabel">Delete User</h5>
                    <button type="button" class="close" data-dismiss="modal" aria-label="Close">
                        <span aria-hidden="true">&times;</span>
                    </button>
                </div>
                <div class="modal-body">
                    <form id="deleteForm" method="POST">
                        <input type="hidden" id="deleteId" name="id">
                        <p>Are you sure you want to delete this user?</p>
                        <button type="submit" name="delete" class="btn btn-danger">Delete</button>
                    </form>
                </div>
            </div>
        </div>
    </div>"##;

const RECORDS_PAGE_SCRIPT: &str = r##"    <script src="https://code.jquery.com/jquery-3.5.1.slim.min.js"></script>
    <script src="https://cdn.jsdelivr.net/npm/@popperjs/core@2.9.3/dist/umd/popper.min.js"></script>
    <script src="https://stackpath.bootstrapcdn.com/bootstrap/4.5.2/js/bootstrap.min.js"></script>

    <script>
        // Populate the edit modal from the clicked row
        $('.edit-btn').on('click', function() {
            var id = $(this).data('id');
            var row = $(this).closest('tr');
            $('#editId').val(id);
            $('#editFirstName').val(row.find('td:eq(0)').text());
            $('#editSecondName').val(row.find('td:eq(1)').text());
            $('#editLastName').val(row.find('td:eq(2)').text());
            $('#editPhone').val(row.find('td:eq(3)').text());
        });

        // Carry the row id into the delete modal
        $('.delete-btn').on('click', function() {
            var id = $(this).data('id');
            $('#deleteId').val(id);
        });
    </script>"##;

/// On-load alert delivering a status message once per render
fn alert_script(message: &str) -> String {
    // A JSON string literal doubles as a JavaScript string literal.
    let literal = serde_json::to_string(message).expect("string serialization is infallible");
    format!("<script>window.onload = function() {{ alert({literal}); }};</script>")
}

/// The submission page
pub fn form_page(message: Option<&str>) -> Html<String> {
    let alert = message.map(|m| alert_script(m)).unwrap_or_default();

    Html(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Submit Your Details</title>
    {style}
    {alert}
</head>
<body>
    <div class="container">
        <h1>Submit Your Details</h1>

        <form action="" method="post">
            <label for="firstname">First Name:</label>
            <input type="text" id="firstname" name="firstname" required>

            <label for="secondname">Second Name:</label>
            <input type="text" id="secondname" name="secondname" required>

            <label for="lastname">Last Name:</label>
            <input type="text" id="lastname" name="lastname" required>

            <label for="phone">Phone Number:</label>
            <input type="tel" id="phone" name="phone" required>

            <div class="button-container">
                <button type="submit">Submit</button>
                <button type="button" onclick="window.location.href='records'">Display Records</button>
            </div>
        </form>
    </div>
</body>
</html>"##,
        style = FORM_PAGE_STYLE,
        alert = alert,
    ))
}

/// The records page: every stored record plus edit/delete controls
pub fn records_page(records: &[User], message: Option<&str>) -> Html<String> {
    let alert = message.map(|m| alert_script(m)).unwrap_or_default();

    let listing = if records.is_empty() {
        "<p>No records found.</p>".to_string()
    } else {
        let rows: String = records.iter().map(record_row).collect();
        format!(
            r##"<table class="table table-bordered table-striped">
            <thead>
                <tr>
                    <th>First Name</th>
                    <th>Second Name</th>
                    <th>Last Name</th>
                    <th>Phone Number</th>
                    <th>Actions</th>
                </tr>
            </thead>
            <tbody>
{rows}            </tbody>
        </table>"##
        )
    };

    Html(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>User Records</title>
    <link rel="stylesheet" href="https://stackpath.bootstrapcdn.com/bootstrap/4.5.2/css/bootstrap.min.css">
    {style}
    {alert}
</head>
<body>
    <div class="container">
        <h1>User Records</h1>

        {listing}

        <a class="btn btn-primary" href="index">Back to Form</a>
    </div>

{modals}

{script}
</body>
</html>"##,
        style = RECORDS_PAGE_STYLE,
        alert = alert,
        listing = listing,
        modals = RECORDS_MODALS,
        script = RECORDS_PAGE_SCRIPT,
    ))
}

fn record_row(record: &User) -> String {
    format!(
        r##"                <tr>
                    <td>{firstname}</td>
                    <td>{secondname}</td>
                    <td>{lastname}</td>
                    <td>{phone}</td>
                    <td>
                        <button class="btn btn-warning btn-sm edit-btn" data-id="{id}" data-toggle="modal" data-target="#editModal">Edit</button>
                        <button class="btn btn-danger btn-sm delete-btn" data-id="{id}" data-toggle="modal" data-target="#deleteModal">Delete</button>
                    </td>
                </tr>
"##,
        firstname = escape_html(&record.firstname),
        secondname = escape_html(&record.secondname),
        lastname = escape_html(&record.lastname),
        phone = escape_html(&record.phone),
        id = record.id,
    )
}

/// Minimal page for a request that failed at the error boundary
pub fn error_page(message: &str) -> Html<String> {
    let alert = alert_script(message);

    Html(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>User Records</title>
    {alert}
</head>
<body>
    <p>Something went wrong while loading this page.</p>
</body>
</html>"##,
        alert = alert,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32, firstname: &str, phone: &str) -> User {
        User {
            id,
            firstname: firstname.to_string(),
            secondname: "Middle".to_string(),
            lastname: "Last".to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn test_form_page_without_message_has_no_alert() {
        let page = form_page(None).0;
        assert!(page.contains(r#"name="firstname""#));
        assert!(page.contains(r#"name="phone""#));
        assert!(!page.contains("window.onload"));
    }

    #[test]
    fn test_form_page_renders_message_as_alert() {
        let page = form_page(Some("All fields are required.")).0;
        assert!(page.contains(r#"alert("All fields are required.")"#));
    }

    #[test]
    fn test_alert_text_is_js_escaped() {
        let page = form_page(Some(r#"say "hi""#)).0;
        assert!(page.contains(r#"alert("say \"hi\"")"#));
    }

    #[test]
    fn test_records_page_with_no_records() {
        let page = records_page(&[], None).0;
        assert!(page.contains("No records found."));
        assert!(!page.contains("<table"));
    }

    #[test]
    fn test_records_page_lists_rows_with_ids() {
        let records = vec![record(7, "Ada", "+1 555-1212"), record(9, "Grace", "+1 555-3434")];
        let page = records_page(&records, None).0;
        assert!(page.contains(r#"data-id="7""#));
        assert!(page.contains(r#"data-id="9""#));
        assert!(page.contains("<td>Ada</td>"));
        assert!(page.contains("<td>+1 555-3434</td>"));
    }

    #[test]
    fn test_records_page_escapes_stored_values() {
        let records = vec![record(1, "<b>bold</b>", "555")];
        let page = records_page(&records, None).0;
        assert!(page.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!page.contains("<td><b>bold</b></td>"));
    }

    #[test]
    fn test_records_page_delivers_flash_as_alert() {
        let page = records_page(&[], Some("Record deleted successfully!")).0;
        assert!(page.contains(r#"alert("Record deleted successfully!")"#));
    }

    #[test]
    fn test_error_page_carries_message() {
        let page = error_page("Connection failed: timeout").0;
        assert!(page.contains(r#"alert("Connection failed: timeout")"#));
    }
}
