use anyhow::{Result, bail};
use std::io::{self, IsTerminal};
use zeroize::Zeroizing;

const PASSWORD_ENV: &str = "PASSPROOF_PASSWORD";

/// Reads a password from the environment or a piped stdin line.
fn read_noninteractive() -> Result<Option<Zeroizing<String>>> {
    //  Environment Variable
    //  PASSPROOF_PASSWORD="supersecret" passproof hash
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Some(Zeroizing::new(pw)));
        }
    }

    //  stdin (Pipeline)
    //  echo "supersecret" | passproof verify <HASH>
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_line(&mut buf)?;
        trim_newline(&mut buf);

        if !buf.is_empty() {
            return Ok(Some(buf));
        }
    }

    Ok(None)
}

pub fn read_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = read_noninteractive()? {
        return Ok(pw);
    }

    if io::stdin().is_terminal() {
        let pw = Zeroizing::new(rpassword::prompt_password("Password: ")?);
        if !pw.is_empty() {
            return Ok(pw);
        }
    }

    bail!("No password provided")
}

pub fn read_new_password_with_confirmation() -> Result<Zeroizing<String>> {
    if let Some(pw) = read_noninteractive()? {
        return Ok(pw);
    }

    if !io::stdin().is_terminal() {
        bail!("No password provided");
    }

    let pw1 = Zeroizing::new(rpassword::prompt_password("New password: ")?);
    let pw2 = Zeroizing::new(rpassword::prompt_password("Confirm password: ")?);

    if pw1.is_empty() {
        bail!("password cannot be empty");
    }

    if pw1 != pw2 {
        bail!("passwords do not match");
    }

    Ok(pw1)
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
