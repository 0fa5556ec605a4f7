//! Encrypts and decrypts one block, then digests a message.

use cipher_core::{decrypt_block, encrypt_block, BlockCipher, CipherKey, Profile};

fn main() -> Result<(), digest_core::DigestError> {
    let key = CipherKey::from(*b"YELLOW SUBMARINE");
    let block = *b"first block here";

    let ciphertext = encrypt_block(&block, &key);
    assert_eq!(decrypt_block(&ciphertext, &key), block);
    println!("reduced: {}", hex::encode(ciphertext));

    let aes = BlockCipher::with_profile(&key, Profile::FIPS197);
    println!("fips197: {}", hex::encode(aes.encrypt_block(&block)));

    println!("digest(\"abc\") = {}", digest_core::digest(b"abc")?);
    Ok(())
}
