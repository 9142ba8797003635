/// Manifest written by `crudgen init`.
pub const STARTER_MANIFEST: &str = r#"# crudgen manifest
#
# Each [models.<Name>] table describes one model. Fields are generated in
# the order they are listed; `tag` is the JSON key and defaults to the
# lowercased field name.

[project]
output = "api/rest"
router = "combined"

[plurals]
# Person = "People"

[models.User]
table = "users"
fields = [
    { name = "ID", type = "uint", tag = "id" },
    { name = "Name", type = "string", tag = "name" },
    { name = "Email", type = "string", tag = "email" },
    { name = "CreatedAt", type = "timestamp", tag = "created_at" },
    { name = "UpdatedAt", type = "timestamp", tag = "updated_at" },
]

[models.Post]
table = "posts"
fields = [
    { name = "ID", type = "uint", tag = "id" },
    { name = "Content", type = "string", tag = "content" },
    { name = "AuthorId", type = "uint", tag = "author_id" },
    { name = "TimeStamp", type = "timestamp", tag = "timestamp" },
]
"#;
