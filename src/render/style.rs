//! A4 print stylesheet embedded in the plan document.

pub const A4_STYLE: &str = r#"
@page {
    size: A4;
    margin: 2cm 1.5cm;
}
body {
    font-family: Comic Sans MS, cursive, sans-serif;
    color: #333;
}
header {
    text-align: right;
    font-size: 0.9em;
    color: #888;
    margin-bottom: 10px;
}
h1 {
    text-align: center;
    color: #ff6f61;
    margin-top: 0;
}
table {
    width: 100%;
    border-collapse: collapse;
    margin-top: 20px;
}
th {
    background-color: #ffccbc;
    color: #fff;
    padding: 8px;
    border: 1px solid #ffab91;
}
td {
    border: 1px solid #ffccbc;
    padding: 8px;
    vertical-align: top;
    background-color: #fff3e0;
    font-size: 0.95em;
}
h2 {
    color: #4caf50;
    margin-top: 30px;
    page-break-before: always;
}
h3 {
    color: #2e7d32;
    margin-top: 15px;
}
ul {
    list-style-type: none;
    padding-left: 0;
}
li {
    background: #e8f5e9;
    margin: 5px 0;
    padding: 6px;
    border-radius: 4px;
}
footer {
    position: fixed;
    bottom: 1cm;
    width: 100%;
    text-align: center;
    font-size: 0.8em;
    color: #aaa;
}
"#;
